// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Debug;
use std::sync::Arc;

use crate::config::{ConfigPath, ConfigSection};
use crate::engine::hook;
use crate::engine::{BuildContext, Services};
use crate::errors::BuildError;
use crate::executable::{ExecutionCapability, Predicate};
use crate::traits::HookContext;

/// A configured predicate node.
///
/// Nodes are immutable once built and shared through `Arc`. The capability is
/// computed at construction, bottom-up, so asking for it is free.
pub trait PredicateNode: Send + Sync + Debug {
    /// Configuration path; the node's identity.
    fn path(&self) -> &ConfigPath;

    fn capability(&self) -> ExecutionCapability;

    /// Compile the node. `None` means the node is void (e.g. a placeholder).
    fn create_predicate(&self, services: &Services) -> Option<Predicate>;

    /// Direct child nodes, in configured order.
    fn children(&self) -> Vec<Arc<dyn PredicateNode>> {
        Vec::new()
    }

    /// Compile the node with `hooks` observing every evaluation.
    ///
    /// Composite nodes override this so each child fires its own hooks.
    fn create_hook(&self, hooks: &Arc<dyn HookContext>, services: &Services) -> Option<Predicate> {
        self.create_predicate(services)
            .map(|p| hook::wrap_predicate(self.path().clone(), p, hooks.clone()))
    }

    /// Replace the placeholder that accepts `patch`, somewhere in this subtree.
    ///
    /// `Ok(None)` means nothing changed and the caller keeps its reference.
    fn set_placeholder(
        &self,
        _patch: &ConfigSection,
        _ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn PredicateNode>>, BuildError> {
        Ok(None)
    }
}
