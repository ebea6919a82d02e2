// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Debug;
use std::sync::Arc;

use crate::config::{ConfigPath, ConfigSection};
use crate::engine::hook;
use crate::engine::{BuildContext, Services};
use crate::errors::BuildError;
use crate::executable::{ExecutionCapability, Transform};
use crate::traits::HookContext;

/// A configured transform node. `None` from [`create_transform`] is the
/// identity mapping.
///
/// [`create_transform`]: TransformNode::create_transform
pub trait TransformNode: Send + Sync + Debug {
    fn path(&self) -> &ConfigPath;

    fn capability(&self) -> ExecutionCapability;

    fn create_transform(&self, services: &Services) -> Option<Transform>;

    fn children(&self) -> Vec<Arc<dyn TransformNode>> {
        Vec::new()
    }

    fn create_hook(&self, hooks: &Arc<dyn HookContext>, services: &Services) -> Option<Transform> {
        self.create_transform(services)
            .map(|t| hook::wrap_transform(self.path().clone(), t, hooks.clone()))
    }

    fn set_placeholder(
        &self,
        _patch: &ConfigSection,
        _ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn TransformNode>>, BuildError> {
        Ok(None)
    }
}
