// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, OnceLock};

use crate::config::ConfigPath;
use crate::engine::Services;
use crate::executable::{ExecutionCapability, Predicate};
use crate::traits::PredicateNode;

static ALWAYS_TRUE: OnceLock<Arc<ConstantPredicate>> = OnceLock::new();
static ALWAYS_FALSE: OnceLock<Arc<ConstantPredicate>> = OnceLock::new();

/// Always-true or always-false predicate.
///
/// The `true`/`false` type shortcuts build path-bearing instances; folded
/// empty groups share the canonical ones from [`ConstantPredicate::canonical`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantPredicate {
    path: ConfigPath,
    value: bool,
}

impl ConstantPredicate {
    pub fn new(path: ConfigPath, value: bool) -> Self {
        Self { path, value }
    }

    /// The shared always-true (or always-false) node.
    pub fn canonical(value: bool) -> Arc<dyn PredicateNode> {
        let cell = if value { &ALWAYS_TRUE } else { &ALWAYS_FALSE };
        cell.get_or_init(|| Arc::new(ConstantPredicate::new(ConfigPath::default(), value)))
            .clone()
    }

    pub fn always_true() -> Arc<dyn PredicateNode> {
        Self::canonical(true)
    }

    pub fn always_false() -> Arc<dyn PredicateNode> {
        Self::canonical(false)
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl PredicateNode for ConstantPredicate {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        ExecutionCapability::SyncOnly
    }

    fn create_predicate(&self, services: &Services) -> Option<Predicate> {
        Some(services.execution_mode().predicate(Predicate::constant(self.value)))
    }
}
