// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configured node families.
//!
//! Nodes are immutable and shared through `Arc`. Composite nodes compute their
//! [`ExecutionCapability`](crate::ExecutionCapability) once, when they are
//! built, from the capabilities of their parts. Placeholder replacement never
//! mutates a node: it rebuilds the nodes on the path to the placeholder and
//! reuses every other `Arc` as is.

use std::fmt;
use std::sync::Arc;

use crate::config::{BuilderOptions, ConfigPath, ConfigSection};
use crate::engine::BuildContext;
use crate::errors::BuildError;
use crate::traits::NodeFactory;

pub mod predicates;
pub mod processors;
pub mod transforms;

/// `true` when both handles point at the same node.
///
/// Compares data pointers only, so it also works across trait objects and
/// the concrete types behind them.
pub fn same_node<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

/// What a placeholder keeps from the build session that created it.
#[derive(Clone)]
pub(crate) struct Residual {
    factory: Arc<dyn NodeFactory>,
    options: BuilderOptions,
}

impl Residual {
    pub(crate) fn new(factory: Arc<dyn NodeFactory>, options: BuilderOptions) -> Self {
        Self { factory, options }
    }

    /// A placeholder takes patches addressed to its direct children.
    pub(crate) fn accepts(placeholder: &ConfigPath, patch: &ConfigSection) -> bool {
        patch.path().is_child_of(placeholder)
    }

    /// Build the replacement with the factory and options of the original session.
    pub(crate) fn build<N: ?Sized>(
        &self,
        ctx: &mut BuildContext,
        build: impl FnOnce(&mut BuildContext) -> Result<Arc<N>, BuildError>,
    ) -> Result<Arc<N>, BuildError> {
        ctx.scoped(self.factory.clone(), self.options.clone(), build)
    }
}

impl fmt::Debug for Residual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Residual").field("options", &self.options).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::predicates::ConstantPredicate;
    use crate::traits::PredicateNode;

    #[test]
    fn test_same_node_across_trait_objects() {
        let concrete = Arc::new(ConstantPredicate::new(ConfigPath::new("A"), true));
        let erased: Arc<dyn PredicateNode> = concrete.clone();
        let other: Arc<dyn PredicateNode> = Arc::new(ConstantPredicate::new(ConfigPath::new("A"), true));

        assert!(same_node(&concrete, &erased));
        assert!(!same_node(&erased, &other));
    }

    #[test]
    fn test_placeholder_accepts_direct_children_only() {
        let placeholder = ConfigPath::new("Root:Predicates:1");
        let cases = vec![
            ("Root:Predicates:1:Patch", true),
            ("root:predicates:1:x", true),
            ("Root:Predicates:1", false),
            ("Root:Predicates:1:Patch:Deeper", false),
            ("Root:Predicates:10:Patch", false),
        ];
        for (path, expected) in cases {
            let patch = ConfigSection::from_yaml_str(path, "true").unwrap();
            assert_eq!(Residual::accepts(&placeholder, &patch), expected, "{}", path);
        }
    }
}
