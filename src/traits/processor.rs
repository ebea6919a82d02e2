// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::config::{ConfigPath, ConfigSection};
use crate::engine::hook;
use crate::engine::{BuildContext, Services};
use crate::errors::BuildError;
use crate::executable::{ExecutionCapability, Predicate, Processor, Transform};
use crate::traits::{HookContext, PredicateNode, TransformNode};

/// A configured processor node. `None` from [`create_processor`] means the
/// node is void: it has neither condition, transform nor children.
///
/// [`create_processor`]: ProcessorNode::create_processor
pub trait ProcessorNode: Send + Sync + Debug {
    fn path(&self) -> &ConfigPath;

    fn capability(&self) -> ExecutionCapability;

    fn create_processor(&self, services: &Services) -> Option<Processor>;

    /// Configured condition node, if any.
    fn condition(&self) -> Option<Arc<dyn PredicateNode>> {
        None
    }

    /// Configured transform node, if any.
    fn transform(&self) -> Option<Arc<dyn TransformNode>> {
        None
    }

    /// Child processors, in switch-case order.
    fn children(&self) -> Vec<Arc<dyn ProcessorNode>> {
        Vec::new()
    }

    fn create_hook(&self, hooks: &Arc<dyn HookContext>, services: &Services) -> Option<Processor> {
        self.create_processor(services)
            .map(|p| hook::wrap_processor(self.path().clone(), p, hooks.clone()))
    }

    fn set_placeholder(
        &self,
        _patch: &ConfigSection,
        _ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn ProcessorNode>>, BuildError> {
        Ok(None)
    }
}

/// Behavior fixed by a processor's kind, independent of its configuration.
///
/// The intrinsic condition is ANDed with the configured one and the intrinsic
/// transform runs before the configured one.
#[derive(Clone, Default)]
pub struct Intrinsic {
    pub condition: Option<Predicate>,
    pub transform: Option<Transform>,
}

impl Intrinsic {
    pub fn new(condition: Option<Predicate>, transform: Option<Transform>) -> Self {
        Self {
            condition,
            transform,
        }
    }

    pub fn condition(condition: Predicate) -> Self {
        Self::new(Some(condition), None)
    }

    pub fn is_empty(&self) -> bool {
        self.condition.is_none() && self.transform.is_none()
    }

    pub fn capability(&self) -> ExecutionCapability {
        let condition = self.condition.as_ref().map(Predicate::capability);
        let transform = self.transform.as_ref().map(Transform::capability);
        condition.into_iter().chain(transform).collect()
    }
}

impl Debug for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intrinsic")
            .field("condition", &self.condition)
            .field("transform", &self.transform)
            .finish()
    }
}
