// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{BuilderOptions, ConfigPath, ConfigSection};
use crate::engine::{BuildContext, Services};
use crate::errors::BuildError;
use crate::executable::{ExecutionCapability, Processor};
use crate::nodes::Residual;
use crate::traits::{HookContext, NodeFactory, ProcessorNode};

/// Void processor standing in for configuration supplied later.
#[derive(Debug)]
pub struct PlaceholderProcessor {
    path: ConfigPath,
    residual: Residual,
}

impl PlaceholderProcessor {
    pub fn new(path: ConfigPath, factory: Arc<dyn NodeFactory>, options: BuilderOptions) -> Self {
        Self {
            path,
            residual: Residual::new(factory, options),
        }
    }
}

impl ProcessorNode for PlaceholderProcessor {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        ExecutionCapability::Void
    }

    fn create_processor(&self, _services: &Services) -> Option<Processor> {
        None
    }

    fn create_hook(&self, _hooks: &Arc<dyn HookContext>, _services: &Services) -> Option<Processor> {
        None
    }

    fn set_placeholder(
        &self,
        patch: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn ProcessorNode>>, BuildError> {
        if !Residual::accepts(&self.path, patch) {
            return Ok(None);
        }
        self.residual
            .build(ctx, |ctx| ctx.try_build_processor(patch))
            .map(Some)
    }
}
