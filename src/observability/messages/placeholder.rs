// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for placeholder substitution.

use std::fmt::{Display, Formatter};
use tracing::Span;

use crate::config::ConfigPath;
use crate::errors::BuildError;
use crate::observability::messages::StructuredLog;

/// A placeholder was replaced by a freshly built subtree.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PlaceholderReplaced<'a> {
    pub placeholder: &'a ConfigPath,
    pub target: &'a ConfigPath,
}

impl Display for PlaceholderReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Placeholder '{}' replaced by configuration '{}'",
            self.placeholder, self.target
        )
    }
}

impl StructuredLog for PlaceholderReplaced<'_> {
    fn log(&self) {
        tracing::info!(placeholder = %self.placeholder, target = %self.target, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "placeholder_replaced",
            span_name = name,
            placeholder = %self.placeholder,
            target = %self.target,
        )
    }
}

/// No placeholder under `root` accepts `target`.
///
/// # Log Level
/// `debug!` - Expected outcome, callers decide what it means
pub struct PlaceholderNotFound<'a> {
    pub root: &'a ConfigPath,
    pub target: &'a ConfigPath,
}

impl Display for PlaceholderNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No placeholder under '{}' accepts configuration '{}'",
            self.root, self.target
        )
    }
}

impl StructuredLog for PlaceholderNotFound<'_> {
    fn log(&self) {
        tracing::debug!(root = %self.root, target = %self.target, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "placeholder_not_found",
            span_name = name,
            root = %self.root,
            target = %self.target,
        )
    }
}

/// The replacement subtree could not be built.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PlaceholderReplacementFailed<'a> {
    pub placeholder: &'a ConfigPath,
    pub error: &'a BuildError,
}

impl Display for PlaceholderReplacementFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Placeholder '{}' could not be replaced: {}",
            self.placeholder, self.error
        )
    }
}

impl StructuredLog for PlaceholderReplacementFailed<'_> {
    fn log(&self) {
        tracing::error!(placeholder = %self.placeholder, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "placeholder_replacement_failed",
            span_name = name,
            placeholder = %self.placeholder,
        )
    }
}
