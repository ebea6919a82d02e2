// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in leaf implementations.
//!
//! The engine never inspects objects; leaves do. This module provides the
//! in-process text library registered by
//! [`TypeRegistry::with_builtins`](crate::engine::TypeRegistry::with_builtins):
//! - **Predicates**: substring tests, text detection, an asynchronous contains
//! - **Transforms**: case conversion, reversal, prefix/suffix addition
//! - **Processor kinds**: intrinsic text-only conditions with their transforms
//!
//! # Architecture
//!
//! ```text
//! ConfigSection → TypeRegistry constructor → LeafPredicate / LeafTransform / Intrinsic
//! ```
//!
//! Other libraries plug in the same way: register constructors on a
//! [`TypeRegistry`](crate::engine::TypeRegistry) or implement
//! [`NodeFactory`](crate::traits::NodeFactory) directly.

pub mod local;
