// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::consts::{CONDITION_KEY, INTRINSIC_SEGMENT, TRANSFORM_KEY};
use crate::config::{ConfigPath, ConfigSection};
use crate::engine::hook::{self, hooked_and};
use crate::engine::{BuildContext, Services};
use crate::errors::BuildError;
use crate::executable::transform::compose;
use crate::executable::{ExecutionCapability, Predicate, Processor, Transform};
use crate::traits::{HookContext, Intrinsic, PredicateNode, ProcessorNode, TransformNode};

/// Processor built from configuration: the intrinsic behavior of its kind,
/// an optional configured condition and transform, and child processors tried
/// switch-case style.
///
/// The intrinsic condition is ANDed with the configured one; the intrinsic
/// transform runs before the configured one.
#[derive(Debug)]
pub struct ConfiguredProcessor {
    path: ConfigPath,
    type_name: String,
    intrinsic: Intrinsic,
    condition: Option<Arc<dyn PredicateNode>>,
    transform: Option<Arc<dyn TransformNode>>,
    children: Vec<Arc<dyn ProcessorNode>>,
    capability: ExecutionCapability,
}

impl ConfiguredProcessor {
    pub fn new(
        path: ConfigPath,
        type_name: impl Into<String>,
        intrinsic: Intrinsic,
        condition: Option<Arc<dyn PredicateNode>>,
        transform: Option<Arc<dyn TransformNode>>,
        children: Vec<Arc<dyn ProcessorNode>>,
    ) -> Self {
        let capability = std::iter::once(intrinsic.capability())
            .chain(condition.iter().map(|c| c.capability()))
            .chain(transform.iter().map(|t| t.capability()))
            .chain(children.iter().map(|c| c.capability()))
            .collect();
        Self {
            path,
            type_name: type_name.into(),
            intrinsic,
            condition,
            transform,
            children,
            capability,
        }
    }

    /// Build the configured part of a processor around an already resolved
    /// intrinsic. Condition, transform and children are all attempted before
    /// any failure is reported.
    pub fn from_config(
        type_name: &str,
        intrinsic: Intrinsic,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Arc<dyn ProcessorNode>, BuildError> {
        let mut failed = 0;

        let condition = match section.get(CONDITION_KEY) {
            Some(condition) => {
                let built = ctx.build_predicate(&condition);
                failed += usize::from(built.is_none());
                built
            }
            None => None,
        };
        let transform = match section.get(TRANSFORM_KEY) {
            Some(transform) => {
                let built = ctx.build_transform(&transform);
                failed += usize::from(built.is_none());
                built
            }
            None => None,
        };

        let items_key = ctx.options().processor_items_key.clone();
        let children = match ctx.build_items(section, &items_key, BuildContext::build_processor) {
            Ok(children) => children,
            Err(BuildError::ChildrenFailed { failed: count, .. }) => {
                failed += count;
                Vec::new()
            }
            Err(error) => return Err(error),
        };

        if failed > 0 {
            return Err(BuildError::ChildrenFailed {
                path: section.path().clone(),
                failed,
            });
        }

        Ok(Arc::new(ConfiguredProcessor::new(
            section.path().clone(),
            type_name,
            intrinsic,
            condition,
            transform,
            children,
        )))
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn intrinsic(&self) -> &Intrinsic {
        &self.intrinsic
    }

    fn rebuilt(
        &self,
        condition: Option<Arc<dyn PredicateNode>>,
        transform: Option<Arc<dyn TransformNode>>,
        children: Vec<Arc<dyn ProcessorNode>>,
    ) -> Arc<dyn ProcessorNode> {
        Arc::new(ConfiguredProcessor::new(
            self.path.clone(),
            self.type_name.clone(),
            self.intrinsic.clone(),
            condition,
            transform,
            children,
        ))
    }

    fn intrinsic_parts(&self, services: &Services) -> (Option<Predicate>, Option<Transform>) {
        let mode = services.execution_mode();
        (
            self.intrinsic.condition.clone().map(|c| mode.predicate(c)),
            self.intrinsic.transform.clone().map(|t| mode.transform(t)),
        )
    }
}

impl ProcessorNode for ConfiguredProcessor {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        self.capability
    }

    fn create_processor(&self, services: &Services) -> Option<Processor> {
        let (intrinsic_condition, intrinsic_transform) = self.intrinsic_parts(services);

        let configured = self.condition.as_ref().and_then(|c| c.create_predicate(services));
        let condition = match (intrinsic_condition, configured) {
            (Some(intrinsic), Some(configured)) => Some(intrinsic.and(configured)),
            (intrinsic, configured) => intrinsic.or(configured),
        };
        let transform = compose(
            intrinsic_transform,
            self.transform.as_ref().and_then(|t| t.create_transform(services)),
        );
        let children = self
            .children
            .iter()
            .filter_map(|child| child.create_processor(services))
            .collect();

        Processor::switch(condition, transform, children)
    }

    fn condition(&self) -> Option<Arc<dyn PredicateNode>> {
        self.condition.clone()
    }

    fn transform(&self) -> Option<Arc<dyn TransformNode>> {
        self.transform.clone()
    }

    fn children(&self) -> Vec<Arc<dyn ProcessorNode>> {
        self.children.clone()
    }

    fn create_hook(&self, hooks: &Arc<dyn HookContext>, services: &Services) -> Option<Processor> {
        let (intrinsic_condition, intrinsic_transform) = self.intrinsic_parts(services);
        let intrinsic_path = self.path.child(INTRINSIC_SEGMENT);

        let intrinsic_condition =
            intrinsic_condition.map(|c| hook::wrap_predicate(intrinsic_path.clone(), c, hooks.clone()));
        let configured = self.condition.as_ref().and_then(|c| c.create_hook(hooks, services));
        let condition = match (intrinsic_condition, configured) {
            (Some(intrinsic), Some(configured)) => Some(hooked_and(intrinsic, configured)),
            (intrinsic, configured) => intrinsic.or(configured),
        };

        let intrinsic_transform =
            intrinsic_transform.map(|t| hook::wrap_transform(intrinsic_path.clone(), t, hooks.clone()));
        let transform = compose(
            intrinsic_transform,
            self.transform.as_ref().and_then(|t| t.create_hook(hooks, services)),
        );
        let children = self
            .children
            .iter()
            .filter_map(|child| child.create_hook(hooks, services))
            .collect();

        Processor::switch(condition, transform, children)
            .map(|p| hook::wrap_processor(self.path.clone(), p, hooks.clone()))
    }

    fn set_placeholder(
        &self,
        patch: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn ProcessorNode>>, BuildError> {
        if !patch.path().is_descendant_of(&self.path) {
            return Ok(None);
        }
        if let Some(condition) = &self.condition {
            if let Some(replaced) = condition.set_placeholder(patch, ctx)? {
                return Ok(Some(self.rebuilt(
                    Some(replaced),
                    self.transform.clone(),
                    self.children.clone(),
                )));
            }
        }
        if let Some(transform) = &self.transform {
            if let Some(replaced) = transform.set_placeholder(patch, ctx)? {
                return Ok(Some(self.rebuilt(
                    self.condition.clone(),
                    Some(replaced),
                    self.children.clone(),
                )));
            }
        }
        for (index, child) in self.children.iter().enumerate() {
            if let Some(replaced) = child.set_placeholder(patch, ctx)? {
                let mut children = self.children.clone();
                children[index] = replaced;
                return Ok(Some(self.rebuilt(
                    self.condition.clone(),
                    self.transform.clone(),
                    children,
                )));
            }
        }
        Ok(None)
    }
}
