// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building node trees from configuration.

use thiserror::Error;

use crate::config::ConfigPath;
use crate::traits::NodeFamily;

/// A construction failure for the node at `path`.
///
/// Builders never propagate these as panics: the error is recorded in the
/// [`Diagnostics`](crate::errors::Diagnostics) sink and the construction
/// yields no node.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Missing '{key}' at '{path}'.")]
    MissingType { path: ConfigPath, key: &'static str },

    #[error("Unknown {family} type '{type_name}' at '{path}'.")]
    UnknownType {
        family: NodeFamily,
        type_name: String,
        path: ConfigPath,
    },

    #[error("Invalid value '{value}' for '{key}' at '{path}': expected {expected}.")]
    InvalidValue {
        path: ConfigPath,
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("'{key}' must not be negative at '{path}' (got {value}).")]
    NegativeCount {
        path: ConfigPath,
        key: &'static str,
        value: i64,
    },

    #[error("AtMost ({at_most}) must be greater than or equal to AtLeast ({at_least}) at '{path}'.")]
    AtMostBelowAtLeast {
        path: ConfigPath,
        at_least: usize,
        at_most: usize,
    },

    #[error("'{key}' at '{path}' must be a list.")]
    NotASequence { path: ConfigPath, key: String },

    #[error("Required section '{key}' is missing at '{path}'.")]
    MissingSection { path: ConfigPath, key: &'static str },

    #[error("{failed} child node(s) of '{path}' could not be built.")]
    ChildrenFailed { path: ConfigPath, failed: usize },

    #[error("Invalid {family} configuration at '{path}': {reason}")]
    Invalid {
        family: NodeFamily,
        path: ConfigPath,
        reason: String,
    },
}

impl BuildError {
    /// Path of the section the error is about.
    pub fn path(&self) -> &ConfigPath {
        match self {
            BuildError::MissingType { path, .. }
            | BuildError::UnknownType { path, .. }
            | BuildError::InvalidValue { path, .. }
            | BuildError::NegativeCount { path, .. }
            | BuildError::AtMostBelowAtLeast { path, .. }
            | BuildError::NotASequence { path, .. }
            | BuildError::MissingSection { path, .. }
            | BuildError::ChildrenFailed { path, .. }
            | BuildError::Invalid { path, .. } => path,
        }
    }
}
