// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

pub mod factory;
pub mod hook;
pub mod predicate;
pub mod processor;
pub mod transform;

pub use factory::NodeFactory;
pub use hook::HookContext;
pub use predicate::PredicateNode;
pub use processor::{Intrinsic, ProcessorNode};
pub use transform::TransformNode;

/// The three node families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeFamily {
    Predicate,
    Transform,
    Processor,
}

impl fmt::Display for NodeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeFamily::Predicate => f.write_str("predicate"),
            NodeFamily::Transform => f.write_str("transform"),
            NodeFamily::Processor => f.write_str("processor"),
        }
    }
}
