// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use crate::config::{load_config_file, BuilderOptions};
    use crate::engine::{set_processor_placeholder, BuildContext, ExecutionMode, Services, TypeRegistry};
    use crate::object::Object;

    fn text(output: Option<Object>) -> Option<String> {
        output.and_then(|o| o.as_text().map(str::to_string))
    }

    /// Test the YAML sifter document: options, filter and processor sections
    #[tokio::test]
    async fn test_text_sifter_yaml_loading() {
        let root = load_config_file("configs/text-sifter.yaml", "Sifter").unwrap();
        let options = BuilderOptions::from_section(&root.get("Options").unwrap()).unwrap();
        assert_eq!(options.predicate_items_key, "Filters");

        let mut ctx = BuildContext::new(Arc::new(TypeRegistry::with_builtins())).with_options(options);
        let filter = ctx.build_predicate(&root.get("Filter").unwrap()).unwrap();
        let processor = ctx.build_processor(&root.get("Processor").unwrap()).unwrap();
        assert!(!ctx.diagnostics().has_errors(), "{:?}", ctx.diagnostics().entries());
        assert_eq!(filter.path().as_str(), "Sifter:Filter");

        for services in [Services::new(), Services::new().with_execution_mode(ExecutionMode::ForceAsync)] {
            let filter = filter.create_predicate(&services).unwrap();
            assert!(filter.evaluate(&Object::from("xy")).await);
            assert!(!filter.evaluate(&Object::from("x")).await);
            assert!(filter.evaluate(&Object::from("xyz")).await);

            let processor = processor.create_processor(&services).unwrap();
            let cases = vec![
                ("#hi", Some("#HI")),
                ("wow!", Some("!wow")),
                ("hello world", Some("<Hello World>")),
            ];
            for (input, expected) in cases {
                let output = text(processor.process(Object::from(input)).await);
                assert_eq!(output.as_deref(), expected, "{}", input);
            }
            assert!(processor.process(Object::new(7_i64)).await.is_none());
        }
    }

    /// Test that a loaded tree accepts a patch for its placeholder
    #[tokio::test]
    async fn test_text_sifter_placeholder_patch() {
        let root = load_config_file("configs/text-sifter.yaml", "Sifter").unwrap();
        let options = BuilderOptions::from_section(&root.get("Options").unwrap()).unwrap();
        let mut ctx = BuildContext::new(Arc::new(TypeRegistry::with_builtins())).with_options(options);
        let processor = ctx.build_processor(&root.get("Processor").unwrap()).unwrap();

        let patch = crate::config::ConfigSection::from_yaml_str(
            "Sifter:Processor:Processors:1:Condition:Filters:1:Patch",
            "{ Type: EndsWith, Text: '?' }",
        )
        .unwrap();
        let (patched, changed) = set_processor_placeholder(&processor, &patch, &mut ctx).unwrap();
        assert!(changed);

        let patched = patched.create_processor(&Services::new()).unwrap();
        assert_eq!(text(patched.process(Object::from("why?")).await).as_deref(), Some("?yhw"));

        let original = processor.create_processor(&Services::new()).unwrap();
        assert_eq!(text(original.process(Object::from("why?")).await).as_deref(), Some("<Why?>"));
    }

    /// Test JSON documents build the same way as YAML ones
    #[tokio::test]
    async fn test_filters_json_loading() {
        let root = load_config_file("configs/filters.json", "Filter").unwrap();
        let mut ctx = BuildContext::new(Arc::new(TypeRegistry::with_builtins()));
        let filter = ctx.build_predicate(&root).unwrap();
        assert!(ctx.diagnostics().is_empty(), "{:?}", ctx.diagnostics().entries());

        let filter = filter.create_predicate(&Services::new()).unwrap();
        let cases = vec![
            ("Found the NEEDLE.", true),
            ("#needle.", false),
            ("needle", false),
            ("needle?!", true),
            ("hay.", false),
        ];
        for (input, expected) in cases {
            assert_eq!(filter.evaluate(&Object::from(input)).await, expected, "{}", input);
        }
    }
}
