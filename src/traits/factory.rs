// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::ConfigSection;
use crate::engine::BuildContext;
use crate::errors::BuildError;
use crate::traits::{Intrinsic, PredicateNode, TransformNode};

/// Resolves configured type names into nodes.
///
/// The builder handles the shortcut names (`true`, `false`, `All`, `Any`,
/// `Group`, `Not`, `Placeholder`, `Sequence`, `Processor`) itself and asks the
/// factory for everything else. Implementations may call back into `ctx` to
/// build nested sections.
pub trait NodeFactory: Send + Sync {
    fn create_predicate(
        &self,
        type_name: &str,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Arc<dyn PredicateNode>, BuildError>;

    fn create_transform(
        &self,
        type_name: &str,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Arc<dyn TransformNode>, BuildError>;

    /// Intrinsic behavior of the processor kind `type_name`.
    fn create_intrinsic(
        &self,
        type_name: &str,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Intrinsic, BuildError>;
}
