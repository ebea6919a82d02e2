// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `build` - node construction events
//! * `placeholder` - placeholder substitution events
//! * `evaluation` - predicate/transform/processor evaluation events
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_sifter::config::ConfigPath;
//! use the_sifter::observability::messages::placeholder::PlaceholderNotFound;
//! use the_sifter::observability::messages::StructuredLog;
//!
//! let root = ConfigPath::new("Root");
//! let target = ConfigPath::new("Other:Patch");
//! PlaceholderNotFound { root: &root, target: &target }.log();
//! ```

use tracing::Span;

pub mod build;
pub mod evaluation;
pub mod placeholder;

/// A message that knows its own level and fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Open a span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}
