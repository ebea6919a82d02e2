// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConfigPath;
use crate::engine::Services;
use crate::executable::{ExecutionCapability, Transform};
use crate::traits::TransformNode;

/// A domain mapping, built by a factory from its configuration.
#[derive(Debug, Clone)]
pub struct LeafTransform {
    path: ConfigPath,
    type_name: String,
    transform: Transform,
}

impl LeafTransform {
    pub fn new(path: ConfigPath, type_name: impl Into<String>, transform: Transform) -> Self {
        Self {
            path,
            type_name: type_name.into(),
            transform,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl TransformNode for LeafTransform {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        self.transform.capability()
    }

    fn create_transform(&self, services: &Services) -> Option<Transform> {
        Some(services.execution_mode().transform(self.transform.clone()))
    }
}
