// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tree construction from configuration sections.
//!
//! The [`BuildContext`] owns everything one build session needs: the
//! [`NodeFactory`] resolving domain type names, the [`BuilderOptions`] and the
//! [`Diagnostics`] sink. Shortcut type names are resolved here; every other
//! type name goes to the factory.
//!
//! Construction never panics and never throws: a node that cannot be built is
//! reported through the diagnostics and yields `None`. A failed child makes
//! its parent fail, but its siblings are still built so that every problem of
//! a document surfaces in one pass.

use std::sync::Arc;

use crate::config::consts::{
    AT_LEAST_KEY, AT_MOST_KEY, ANY_KEY, SINGLE_KEY, TYPE_ALL, TYPE_ANY, TYPE_FALSE, TYPE_GROUP,
    TYPE_KEY, TYPE_NOT, TYPE_PLACEHOLDER, TYPE_PROCESSOR, TYPE_SEQUENCE, TYPE_TRUE,
};
use crate::config::{BuilderOptions, ConfigSection};
use crate::errors::{BuildError, ConfigWarning, Diagnostics};
use crate::nodes::predicates::{ConstantPredicate, GroupPredicate, NotPredicate, PlaceholderPredicate};
use crate::nodes::processors::{ConfiguredProcessor, PlaceholderProcessor};
use crate::nodes::transforms::{PlaceholderTransform, TransformSequence};
use crate::observability::messages::build::NodeBuilt;
use crate::observability::messages::StructuredLog;
use crate::traits::{Intrinsic, NodeFactory, NodeFamily, PredicateNode, ProcessorNode, TransformNode};

/// Keys that only make sense on a group.
pub(crate) const COMBINATOR_KEYS: [&str; 4] = [ANY_KEY, AT_LEAST_KEY, AT_MOST_KEY, SINGLE_KEY];

/// Single-threaded build session.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use the_sifter::config::ConfigSection;
/// use the_sifter::engine::{BuildContext, Services, TypeRegistry};
/// use the_sifter::Object;
///
/// let mut ctx = BuildContext::new(Arc::new(TypeRegistry::with_builtins()));
/// let section = ConfigSection::from_yaml_str(
///     "Root",
///     "Type: Any\nPredicates:\n  - { Type: Contains, Text: a }\n  - { Type: Contains, Text: b }\n",
/// ).unwrap();
///
/// let node = ctx.build_predicate(&section).unwrap();
/// assert!(!ctx.diagnostics().has_errors());
///
/// let predicate = node.create_predicate(&Services::new()).unwrap();
/// let test = predicate.as_sync().unwrap();
/// assert!(test(&Object::from("xbx")));
/// assert!(!test(&Object::from("xyz")));
/// ```
pub struct BuildContext {
    factory: Arc<dyn NodeFactory>,
    options: BuilderOptions,
    diagnostics: Diagnostics,
}

impl BuildContext {
    pub fn new(factory: Arc<dyn NodeFactory>) -> Self {
        Self {
            factory,
            options: BuilderOptions::default(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn factory(&self) -> &Arc<dyn NodeFactory> {
        &self.factory
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Hand the collected diagnostics over, leaving an empty sink behind.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn warn(&mut self, warning: ConfigWarning) {
        self.diagnostics.warn(warning);
    }

    pub fn error(&mut self, error: BuildError) {
        self.diagnostics.error(error);
    }

    // ---- predicates ----

    /// Build a predicate node, recording any failure. `None` means failed.
    pub fn build_predicate(&mut self, section: &ConfigSection) -> Option<Arc<dyn PredicateNode>> {
        let result = self.try_build_predicate(section);
        self.record(result)
    }

    /// Build a predicate node and return the failure instead of recording it.
    pub fn try_build_predicate(
        &mut self,
        section: &ConfigSection,
    ) -> Result<Arc<dyn PredicateNode>, BuildError> {
        let type_name = self.resolve_type_name(section, NodeFamily::Predicate)?;
        let node = self.create_predicate_node(&type_name, section)?;
        NodeBuilt {
            family: NodeFamily::Predicate,
            path: section.path(),
            type_name: &type_name,
            capability: node.capability(),
        }
        .log();
        Ok(node)
    }

    fn create_predicate_node(
        &mut self,
        type_name: &str,
        section: &ConfigSection,
    ) -> Result<Arc<dyn PredicateNode>, BuildError> {
        if is_shortcut(type_name, TYPE_TRUE) || is_shortcut(type_name, TYPE_FALSE) {
            self.warn_ignored_keys(section, type_name, &COMBINATOR_KEYS);
            let value = is_shortcut(type_name, TYPE_TRUE);
            return Ok(Arc::new(ConstantPredicate::new(section.path().clone(), value)));
        }
        if is_shortcut(type_name, TYPE_ALL)
            || is_shortcut(type_name, TYPE_ANY)
            || is_shortcut(type_name, TYPE_GROUP)
        {
            return GroupPredicate::from_config(type_name, section, self);
        }
        if is_shortcut(type_name, TYPE_NOT) {
            return NotPredicate::from_config(section, self);
        }
        if is_shortcut(type_name, TYPE_PLACEHOLDER) {
            return Ok(Arc::new(PlaceholderPredicate::new(
                section.path().clone(),
                self.factory.clone(),
                self.options.clone(),
            )));
        }
        let factory = self.factory.clone();
        factory.create_predicate(type_name, section, self)
    }

    // ---- transforms ----

    pub fn build_transform(&mut self, section: &ConfigSection) -> Option<Arc<dyn TransformNode>> {
        let result = self.try_build_transform(section);
        self.record(result)
    }

    pub fn try_build_transform(
        &mut self,
        section: &ConfigSection,
    ) -> Result<Arc<dyn TransformNode>, BuildError> {
        let type_name = self.resolve_type_name(section, NodeFamily::Transform)?;
        let node: Arc<dyn TransformNode> = if is_shortcut(&type_name, TYPE_SEQUENCE) {
            TransformSequence::from_config(section, self)?
        } else if is_shortcut(&type_name, TYPE_PLACEHOLDER) {
            Arc::new(PlaceholderTransform::new(
                section.path().clone(),
                self.factory.clone(),
                self.options.clone(),
            ))
        } else {
            let factory = self.factory.clone();
            factory.create_transform(&type_name, section, self)?
        };
        NodeBuilt {
            family: NodeFamily::Transform,
            path: section.path(),
            type_name: &type_name,
            capability: node.capability(),
        }
        .log();
        Ok(node)
    }

    // ---- processors ----

    pub fn build_processor(&mut self, section: &ConfigSection) -> Option<Arc<dyn ProcessorNode>> {
        let result = self.try_build_processor(section);
        self.record(result)
    }

    pub fn try_build_processor(
        &mut self,
        section: &ConfigSection,
    ) -> Result<Arc<dyn ProcessorNode>, BuildError> {
        let type_name = self.resolve_type_name(section, NodeFamily::Processor)?;
        let node: Arc<dyn ProcessorNode> = if is_shortcut(&type_name, TYPE_PLACEHOLDER) {
            Arc::new(PlaceholderProcessor::new(
                section.path().clone(),
                self.factory.clone(),
                self.options.clone(),
            ))
        } else {
            let intrinsic = if is_shortcut(&type_name, TYPE_PROCESSOR) {
                Intrinsic::default()
            } else {
                let factory = self.factory.clone();
                factory.create_intrinsic(&type_name, section, self)?
            };
            ConfiguredProcessor::from_config(&type_name, intrinsic, section, self)?
        };
        NodeBuilt {
            family: NodeFamily::Processor,
            path: section.path(),
            type_name: &type_name,
            capability: node.capability(),
        }
        .log();
        Ok(node)
    }

    // ---- helpers shared with the node constructors ----

    /// Build every item of a list, keeping going after failures.
    ///
    /// Returns the built items, or `ChildrenFailed` once the whole list has
    /// been attempted.
    pub(crate) fn build_items<N: ?Sized>(
        &mut self,
        section: &ConfigSection,
        items_key: &str,
        build: impl Fn(&mut Self, &ConfigSection) -> Option<Arc<N>>,
    ) -> Result<Vec<Arc<N>>, BuildError> {
        let sections = section.items(items_key)?.unwrap_or_default();
        let mut built = Vec::with_capacity(sections.len());
        let mut failed = 0;
        for item in &sections {
            match build(self, item) {
                Some(node) => built.push(node),
                None => failed += 1,
            }
        }
        if failed > 0 {
            return Err(BuildError::ChildrenFailed {
                path: section.path().clone(),
                failed,
            });
        }
        Ok(built)
    }

    /// Warn about `keys` present on a section whose type does not use them.
    pub(crate) fn warn_ignored_keys(&mut self, section: &ConfigSection, type_name: &str, keys: &[&str]) {
        let present: Vec<String> = keys
            .iter()
            .filter(|key| section.contains_key(key))
            .map(|key| key.to_string())
            .collect();
        if !present.is_empty() {
            self.warn(ConfigWarning::IgnoredKeys {
                path: section.path().clone(),
                type_name: type_name.to_string(),
                keys: present,
            });
        }
    }

    /// Run `build` with another factory and options, restoring the current
    /// ones afterwards.
    pub(crate) fn scoped<R>(
        &mut self,
        factory: Arc<dyn NodeFactory>,
        options: BuilderOptions,
        build: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let factory = std::mem::replace(&mut self.factory, factory);
        let options = std::mem::replace(&mut self.options, options);
        let result = build(self);
        self.factory = factory;
        self.options = options;
        result
    }

    fn record<N: ?Sized>(&mut self, result: Result<Arc<N>, BuildError>) -> Option<Arc<N>> {
        match result {
            Ok(node) => Some(node),
            Err(error) => {
                self.error(error);
                None
            }
        }
    }

    /// Type name of a section.
    ///
    /// A scalar section is its own type name. Otherwise `Type` wins; a section
    /// without it that carries the family items key is a group (sequence),
    /// and a processor without `Type` is a plain configured processor.
    fn resolve_type_name(&self, section: &ConfigSection, family: NodeFamily) -> Result<String, BuildError> {
        if let Some(name) = section.as_string() {
            return Ok(name);
        }
        if let Some(name) = section.get_str(TYPE_KEY) {
            return Ok(name);
        }
        let fallback = match family {
            NodeFamily::Predicate if section.contains_key(&self.options.predicate_items_key) => {
                Some(TYPE_GROUP)
            }
            NodeFamily::Transform if section.contains_key(&self.options.transform_items_key) => {
                Some(TYPE_SEQUENCE)
            }
            NodeFamily::Processor => Some(TYPE_PROCESSOR),
            _ => None,
        };
        fallback.map(str::to_string).ok_or_else(|| BuildError::MissingType {
            path: section.path().clone(),
            key: TYPE_KEY,
        })
    }
}

pub(crate) fn is_shortcut(type_name: &str, shortcut: &str) -> bool {
    type_name.eq_ignore_ascii_case(shortcut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Services, TypeRegistry};
    use crate::errors::Severity;
    use crate::object::Object;

    fn context() -> BuildContext {
        BuildContext::new(Arc::new(TypeRegistry::with_builtins()))
    }

    fn section(yaml: &str) -> ConfigSection {
        ConfigSection::from_yaml_str("Root", yaml).unwrap()
    }

    #[test]
    fn test_type_name_resolution() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            expect_error: bool,
        }

        let cases = vec![
            TestCase { name: "scalar shortcut", yaml: "true", expect_error: false },
            TestCase { name: "explicit type", yaml: "Type: Contains\nText: a", expect_error: false },
            TestCase { name: "implicit group", yaml: "Predicates: [true, false]", expect_error: false },
            TestCase { name: "missing type", yaml: "Text: a", expect_error: true },
            TestCase { name: "unknown type", yaml: "Type: Nope", expect_error: true },
        ];

        for case in cases {
            let mut ctx = context();
            let built = ctx.build_predicate(&section(case.yaml));
            assert_eq!(built.is_none(), case.expect_error, "case: {}", case.name);
            assert_eq!(ctx.diagnostics().has_errors(), case.expect_error, "case: {}", case.name);
        }
    }

    #[test]
    fn test_failed_child_fails_parent_but_siblings_are_built() {
        let mut ctx = context();
        let root = section(
            "Type: All\nPredicates:\n  - Type: Nope\n  - Type: Contains\n    Text: a\n  - Type: AlsoNope\n",
        );
        assert!(ctx.build_predicate(&root).is_none());

        let errors: Vec<_> = ctx.diagnostics().errors().map(|d| d.path.as_str().to_string()).collect();
        assert_eq!(errors, vec!["Root:Predicates:0", "Root:Predicates:2", "Root"]);
    }

    #[test]
    fn test_shortcut_constants_warn_about_combinator_keys() {
        let mut ctx = context();
        let node = ctx.build_predicate(&section("Type: false\nAtLeast: 2\nAny: true\n")).unwrap();
        let predicate = node.create_predicate(&Services::new()).unwrap();
        assert!(!predicate.as_sync().unwrap()(&Object::from("x")));

        let warnings: Vec<_> = ctx.diagnostics().warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);
        assert!(warnings[0].message.contains("AtLeast"));
    }

    #[test]
    fn test_processor_without_type_is_plain() {
        let mut ctx = context();
        let node = ctx
            .build_processor(&section("Condition: { Type: Contains, Text: a }\n"))
            .unwrap();
        assert!(node.capability().is_sync());
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_items_key_follows_options() {
        let options = BuilderOptions {
            predicate_items_key: "Filters".to_string(),
            ..BuilderOptions::default()
        };
        let mut ctx = context().with_options(options);
        let node = ctx.build_predicate(&section("Any: true\nFilters: [false, true]\n"));
        assert!(node.is_some());
        assert!(ctx.build_predicate(&section("Predicates: [true]\n")).is_none());
    }

    #[test]
    fn test_take_diagnostics_leaves_empty_sink() {
        let mut ctx = context();
        ctx.build_predicate(&section("Type: Nope"));
        let taken = ctx.take_diagnostics();
        assert_eq!(taken.error_count(), 1);
        assert!(ctx.diagnostics().is_empty());
    }
}
