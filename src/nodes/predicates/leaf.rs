// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConfigPath;
use crate::engine::Services;
use crate::executable::{ExecutionCapability, Predicate};
use crate::traits::PredicateNode;

/// A domain test, built by a factory from its configuration.
#[derive(Debug, Clone)]
pub struct LeafPredicate {
    path: ConfigPath,
    type_name: String,
    predicate: Predicate,
}

impl LeafPredicate {
    pub fn new(path: ConfigPath, type_name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            path,
            type_name: type_name.into(),
            predicate,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl PredicateNode for LeafPredicate {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        self.predicate.capability()
    }

    fn create_predicate(&self, services: &Services) -> Option<Predicate> {
        Some(services.execution_mode().predicate(self.predicate.clone()))
    }
}
