// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured diagnostic channel for tree construction.
//!
//! Every entry is also emitted through `tracing` when it is recorded, so a
//! subscriber sees construction problems as they happen while callers can
//! still inspect them afterwards.

use std::fmt;

use crate::config::ConfigPath;
use crate::errors::{BuildError, ConfigWarning};
use crate::observability::messages::build::{ConfigurationAutoCorrected, NodeBuildFailed};
use crate::observability::messages::StructuredLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: ConfigPath,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.path, self.message)
    }
}

/// Collected warnings and errors of one build session.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: BuildError) {
        NodeBuildFailed { error: &error }.log();
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            path: error.path().clone(),
            message: error.to_string(),
        });
    }

    pub fn warn(&mut self, warning: ConfigWarning) {
        ConfigurationAutoCorrected { warning: &warning }.log();
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            path: warning.path().clone(),
            message: warning.to_string(),
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_and_warnings_are_separated() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.warn(ConfigWarning::AnyOverridesAtLeast {
            path: ConfigPath::new("Root"),
        });
        assert!(!diagnostics.has_errors());

        diagnostics.error(BuildError::MissingSection {
            path: ConfigPath::new("Root:Predicates:0"),
            key: "Operand",
        });
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warnings().count(), 1);

        let error = diagnostics.errors().next().unwrap();
        assert_eq!(error.path.as_str(), "Root:Predicates:0");
        assert!(error.to_string().starts_with("[error] Root:Predicates:0"));

        diagnostics.clear();
        assert!(diagnostics.is_empty());
    }
}
