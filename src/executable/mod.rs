// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Executable closures produced from node trees.
//!
//! Every executable is a tagged union of a synchronous and an asynchronous
//! function. Composition picks the synchronous arm whenever every operand is
//! synchronous, so a fully synchronous subtree never pays for futures. Callers
//! match on the tag (or use the async entry points, which accept both arms).
//!
//! ```text
//! leaf executables ──► combinators (group / compose / switch) ──► root executable
//!      Sync | Async            Sync iff all operands Sync          Sync | Async
//! ```

pub mod capability;
pub mod group;
pub mod predicate;
pub mod processor;
pub mod transform;

pub use capability::ExecutionCapability;
pub use group::GroupPolicy;
pub use predicate::{AsyncPredicateFn, Predicate, SyncPredicateFn};
pub use processor::{AsyncProcessFn, ProcessFn, Processor, SyncProcessFn};
pub use transform::{AsyncTransformFn, SyncTransformFn, Transform};
