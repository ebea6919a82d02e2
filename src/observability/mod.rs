// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern: each event is a struct with a
//! `Display` implementation for the human-readable line and a
//! [`StructuredLog`](messages::StructuredLog) implementation that emits it
//! through `tracing` with typed fields. This keeps message text out of the
//! engine code and gives every event a consistent shape.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::build` - node construction, auto-corrections and failures
//! * `messages::placeholder` - placeholder substitution
//! * `messages::evaluation` - hook-driven evaluation events
//!
//! [`TracingHookContext`] plugs the evaluation messages into the hook
//! mechanism so any compiled tree can be traced without changing results.
//!
//! # Usage
//!
//! ```rust
//! use the_sifter::config::ConfigPath;
//! use the_sifter::observability::messages::evaluation::PredicateEvaluated;
//!
//! let path = ConfigPath::new("Root:Predicates:0");
//! let msg = PredicateEvaluated {
//!     path: &path,
//!     result: true,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
mod tracing_hook;

pub use tracing_hook::TracingHookContext;
