// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{ConfigPath, ConfigSection};
use crate::engine::hook;
use crate::engine::{BuildContext, Services};
use crate::errors::BuildError;
use crate::executable::transform::sequence;
use crate::executable::{ExecutionCapability, Transform};
use crate::traits::{HookContext, TransformNode};

/// Transforms applied one after another, in configured order.
///
/// An empty sequence (or one whose items are all void) is the identity.
#[derive(Debug)]
pub struct TransformSequence {
    path: ConfigPath,
    items: Vec<Arc<dyn TransformNode>>,
    capability: ExecutionCapability,
}

impl TransformSequence {
    pub fn new(path: ConfigPath, items: Vec<Arc<dyn TransformNode>>) -> Self {
        let capability = items.iter().map(|item| item.capability()).collect();
        Self {
            path,
            items,
            capability,
        }
    }

    pub fn from_config(section: &ConfigSection, ctx: &mut BuildContext) -> Result<Arc<dyn TransformNode>, BuildError> {
        let items_key = ctx.options().transform_items_key.clone();
        let items = ctx.build_items(section, &items_key, BuildContext::build_transform)?;
        Ok(Arc::new(TransformSequence::new(section.path().clone(), items)))
    }

    pub fn items(&self) -> &[Arc<dyn TransformNode>] {
        &self.items
    }
}

impl TransformNode for TransformSequence {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        self.capability
    }

    fn create_transform(&self, services: &Services) -> Option<Transform> {
        sequence(
            self.items
                .iter()
                .filter_map(|item| item.create_transform(services))
                .collect(),
        )
    }

    fn children(&self) -> Vec<Arc<dyn TransformNode>> {
        self.items.clone()
    }

    fn create_hook(&self, hooks: &Arc<dyn HookContext>, services: &Services) -> Option<Transform> {
        let items = self
            .items
            .iter()
            .filter_map(|item| item.create_hook(hooks, services))
            .collect();
        sequence(items).map(|t| hook::wrap_transform(self.path.clone(), t, hooks.clone()))
    }

    fn set_placeholder(
        &self,
        patch: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn TransformNode>>, BuildError> {
        if !patch.path().is_descendant_of(&self.path) {
            return Ok(None);
        }
        for (index, item) in self.items.iter().enumerate() {
            if let Some(replaced) = item.set_placeholder(patch, ctx)? {
                let mut items = self.items.clone();
                items[index] = replaced;
                return Ok(Some(Arc::new(TransformSequence::new(self.path.clone(), items))));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ExecutionMode, TypeRegistry};
    use crate::nodes::same_node;
    use crate::object::Object;

    fn build(yaml: &str) -> (BuildContext, Arc<dyn TransformNode>) {
        let mut ctx = BuildContext::new(Arc::new(TypeRegistry::with_builtins()));
        let node = ctx
            .build_transform(&ConfigSection::from_yaml_str("Root", yaml).unwrap())
            .unwrap();
        (ctx, node)
    }

    #[tokio::test]
    async fn test_items_apply_in_order() {
        let (_, node) = build(
            "Transforms:\n  - { Type: ChangeTextCase, Mode: upper }\n  - { Type: PrefixSuffixAdder, Prefix: '<', Suffix: '>' }\n  - ReverseText\n",
        );
        for mode in [ExecutionMode::Hybrid, ExecutionMode::ForceAsync] {
            let services = Services::new().with_execution_mode(mode);
            let transform = node.create_transform(&services).unwrap();
            assert_eq!(transform.is_sync(), mode == ExecutionMode::Hybrid);
            let output = transform.apply(Object::from("abc")).await;
            assert_eq!(output.as_text(), Some(">CBA<"));
        }
    }

    #[test]
    fn test_empty_sequence_is_identity() {
        let (_, node) = build("Type: Sequence\n");
        assert!(node.capability().is_void());
        assert!(node.create_transform(&Services::new()).is_none());
    }

    #[tokio::test]
    async fn test_placeholder_item_is_replaced_and_siblings_shared() {
        let (mut ctx, node) = build("Transforms:\n  - ReverseText\n  - Placeholder\n");
        let patch = ConfigSection::from_yaml_str("Root:Transforms:1:Upper", "{ Type: ChangeTextCase, Mode: upper }")
            .unwrap();

        let replaced = node.set_placeholder(&patch, &mut ctx).unwrap().unwrap();
        assert!(!same_node(&node, &replaced));
        assert!(same_node(&node.children()[0], &replaced.children()[0]));
        assert_eq!(replaced.children()[1].path().as_str(), "Root:Transforms:1:Upper");

        let output = replaced
            .create_transform(&Services::new())
            .unwrap()
            .apply(Object::from("abc"))
            .await;
        assert_eq!(output.as_text(), Some("CBA"));
    }
}
