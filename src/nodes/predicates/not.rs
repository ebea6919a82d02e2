// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::consts::OPERAND_KEY;
use crate::config::{ConfigPath, ConfigSection};
use crate::engine::hook;
use crate::engine::{BuildContext, Services};
use crate::errors::BuildError;
use crate::executable::{ExecutionCapability, Predicate};
use crate::traits::{HookContext, PredicateNode};

/// Negation of exactly one operand. A void operand makes the negation void.
#[derive(Debug)]
pub struct NotPredicate {
    path: ConfigPath,
    operand: Arc<dyn PredicateNode>,
}

impl NotPredicate {
    pub fn new(path: ConfigPath, operand: Arc<dyn PredicateNode>) -> Self {
        Self { path, operand }
    }

    pub fn from_config(section: &ConfigSection, ctx: &mut BuildContext) -> Result<Arc<dyn PredicateNode>, BuildError> {
        let operand = section.get(OPERAND_KEY).ok_or_else(|| BuildError::MissingSection {
            path: section.path().clone(),
            key: OPERAND_KEY,
        })?;
        let operand = ctx.build_predicate(&operand).ok_or_else(|| BuildError::ChildrenFailed {
            path: section.path().clone(),
            failed: 1,
        })?;
        Ok(Arc::new(NotPredicate::new(section.path().clone(), operand)))
    }

    pub fn operand(&self) -> &Arc<dyn PredicateNode> {
        &self.operand
    }
}

impl PredicateNode for NotPredicate {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        self.operand.capability()
    }

    fn create_predicate(&self, services: &Services) -> Option<Predicate> {
        self.operand.create_predicate(services).map(Predicate::not)
    }

    fn children(&self) -> Vec<Arc<dyn PredicateNode>> {
        vec![self.operand.clone()]
    }

    fn create_hook(&self, hooks: &Arc<dyn HookContext>, services: &Services) -> Option<Predicate> {
        self.operand
            .create_hook(hooks, services)
            .map(|p| hook::wrap_predicate(self.path.clone(), p.not(), hooks.clone()))
    }

    fn set_placeholder(
        &self,
        patch: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn PredicateNode>>, BuildError> {
        if !patch.path().is_descendant_of(&self.path) {
            return Ok(None);
        }
        Ok(self
            .operand
            .set_placeholder(patch, ctx)?
            .map(|operand| Arc::new(NotPredicate::new(self.path.clone(), operand)) as Arc<dyn PredicateNode>))
    }
}
