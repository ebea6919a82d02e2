// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for node construction.
//!
//! This module contains message types for logging events related to:
//! * Node construction from configuration sections
//! * Auto-corrected configuration (warnings)
//! * Construction failures (errors)
//! * Group folding

use std::fmt::{Display, Formatter};
use tracing::Span;

use crate::config::ConfigPath;
use crate::errors::{BuildError, ConfigWarning};
use crate::executable::ExecutionCapability;
use crate::observability::messages::StructuredLog;
use crate::traits::NodeFamily;

/// A node could not be built.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct NodeBuildFailed<'a> {
    pub error: &'a BuildError,
}

impl Display for NodeBuildFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node construction failed: {}", self.error)
    }
}

impl StructuredLog for NodeBuildFailed<'_> {
    fn log(&self) {
        tracing::error!(path = %self.error.path(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("node_build_failed", span_name = name, path = %self.error.path())
    }
}

/// The configuration was corrected and construction continued.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use the_sifter::config::ConfigPath;
/// use the_sifter::errors::ConfigWarning;
/// use the_sifter::observability::messages::build::ConfigurationAutoCorrected;
///
/// let warning = ConfigWarning::AnyOverridesAtLeast { path: ConfigPath::new("Root") };
/// let msg = ConfigurationAutoCorrected { warning: &warning };
///
/// assert!(msg.to_string().contains("Any wins"));
/// ```
pub struct ConfigurationAutoCorrected<'a> {
    pub warning: &'a ConfigWarning,
}

impl Display for ConfigurationAutoCorrected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration auto-corrected: {}", self.warning)
    }
}

impl StructuredLog for ConfigurationAutoCorrected<'_> {
    fn log(&self) {
        tracing::warn!(path = %self.warning.path(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("configuration_auto_corrected", span_name = name, path = %self.warning.path())
    }
}

/// A node was built.
///
/// # Log Level
/// `debug!` - Construction detail
pub struct NodeBuilt<'a> {
    pub family: NodeFamily,
    pub path: &'a ConfigPath,
    pub type_name: &'a str,
    pub capability: ExecutionCapability,
}

impl Display for NodeBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built {} '{}' at '{}': capability={}",
            self.family, self.type_name, self.path, self.capability
        )
    }
}

impl StructuredLog for NodeBuilt<'_> {
    fn log(&self) {
        tracing::debug!(
            family = %self.family,
            path = %self.path,
            type_name = self.type_name,
            capability = %self.capability,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node_built",
            span_name = name,
            family = %self.family,
            path = %self.path,
            type_name = self.type_name,
        )
    }
}

/// A group with zero or one item was folded away at construction.
///
/// # Log Level
/// `debug!` - Construction detail
pub struct GroupFolded<'a> {
    pub path: &'a ConfigPath,
    pub item_count: usize,
}

impl Display for GroupFolded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.item_count {
            0 => write!(f, "Group '{}' has no items: using its neutral constant", self.path),
            _ => write!(f, "Group '{}' has a single item: using the item itself", self.path),
        }
    }
}

impl StructuredLog for GroupFolded<'_> {
    fn log(&self) {
        tracing::debug!(path = %self.path, item_count = self.item_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("group_folded", span_name = name, path = %self.path)
    }
}
