// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Building, mutating and instrumenting node trees.
//!
//! ```text
//! ConfigSection ──► BuildContext ──► Arc<dyn *Node> ──► create_* / create_hook ──► executable
//!                    (NodeFactory)          │
//!                                           └──► set_*_placeholder ──► new root (shared spine)
//! ```

pub mod builder;
pub mod hook;
pub mod placeholder;
pub mod registry;
pub mod services;

pub use builder::BuildContext;
pub use placeholder::{set_predicate_placeholder, set_processor_placeholder, set_transform_placeholder};
pub use registry::TypeRegistry;
pub use services::{ExecutionMode, Services};
