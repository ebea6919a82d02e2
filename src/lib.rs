// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // built-in domain leaves
pub mod config;        // configuration sections + builder options
pub mod engine;        // building, placeholders, hooks
pub mod errors;        // error handling + diagnostics
pub mod executable;    // sync/async executables and combinators
pub mod nodes;         // predicate, transform and processor nodes
pub mod object;        // opaque runtime objects
pub mod observability;
pub mod traits;        // node + factory abstractions

pub use executable::{ExecutionCapability, Predicate, Processor, Transform};
pub use object::Object;
