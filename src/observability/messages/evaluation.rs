// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for evaluation events raised through hooks.
//!
//! These are emitted at `trace!`/`debug!` level: evaluation happens once per
//! input object and would drown everything else at higher levels.

use std::fmt::{Display, Formatter};
use tracing::Span;

use crate::config::ConfigPath;
use crate::observability::messages::StructuredLog;
use crate::traits::NodeFamily;

/// A node is about to evaluate an input.
///
/// # Log Level
/// `trace!` - Per-input detail
pub struct EvaluationStarted<'a> {
    pub family: NodeFamily,
    pub path: &'a ConfigPath,
}

impl Display for EvaluationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Evaluating {} '{}'", self.family, self.path)
    }
}

impl StructuredLog for EvaluationStarted<'_> {
    fn log(&self) {
        tracing::trace!(family = %self.family, path = %self.path, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("evaluation", span_name = name, family = %self.family, path = %self.path)
    }
}

/// A predicate produced its result.
///
/// # Log Level
/// `debug!` - Per-input result
///
/// # Example
/// ```
/// use the_sifter::config::ConfigPath;
/// use the_sifter::observability::messages::evaluation::PredicateEvaluated;
///
/// let path = ConfigPath::new("Root");
/// let msg = PredicateEvaluated { path: &path, result: false };
/// assert_eq!(msg.to_string(), "Predicate 'Root' evaluated to false");
/// ```
pub struct PredicateEvaluated<'a> {
    pub path: &'a ConfigPath,
    pub result: bool,
}

impl Display for PredicateEvaluated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Predicate '{}' evaluated to {}", self.path, self.result)
    }
}

impl StructuredLog for PredicateEvaluated<'_> {
    fn log(&self) {
        tracing::debug!(path = %self.path, result = self.result, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("predicate_evaluated", span_name = name, path = %self.path, result = self.result)
    }
}

/// A transform produced its output.
///
/// # Log Level
/// `debug!` - Per-input result
pub struct TransformApplied<'a> {
    pub path: &'a ConfigPath,
    pub same_object: bool,
}

impl Display for TransformApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.same_object {
            write!(f, "Transform '{}' returned its input unchanged", self.path)
        } else {
            write!(f, "Transform '{}' produced a new object", self.path)
        }
    }
}

impl StructuredLog for TransformApplied<'_> {
    fn log(&self) {
        tracing::debug!(path = %self.path, same_object = self.same_object, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("transform_applied", span_name = name, path = %self.path)
    }
}

/// A processor handled (or declined) an input.
///
/// # Log Level
/// `debug!` - Per-input result
pub struct ProcessorEvaluated<'a> {
    pub path: &'a ConfigPath,
    pub handled: bool,
}

impl Display for ProcessorEvaluated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.handled {
            write!(f, "Processor '{}' handled the input", self.path)
        } else {
            write!(f, "Processor '{}' returned void", self.path)
        }
    }
}

impl StructuredLog for ProcessorEvaluated<'_> {
    fn log(&self) {
        tracing::debug!(path = %self.path, handled = self.handled, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("processor_evaluated", span_name = name, path = %self.path, handled = self.handled)
    }
}
