// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Placeholder replacement on persistent node trees.
//!
//! A patch is a configuration section whose parent path is the path of the
//! placeholder it replaces. Only the nodes on the spine from the root to that
//! placeholder are rebuilt; every other node of the new tree is the very same
//! `Arc` as in the old one.
//!
//! Each function returns:
//! * `Ok((root, false))` when no placeholder accepts the patch (the returned
//!   root is the caller's own reference)
//! * `Ok((new_root, true))` when a placeholder was replaced
//! * `Err(error)` when building the replacement failed; the error is also
//!   recorded in the context's diagnostics

use std::sync::Arc;

use crate::config::{ConfigPath, ConfigSection};
use crate::engine::BuildContext;
use crate::errors::BuildError;
use crate::observability::messages::placeholder::{
    PlaceholderNotFound, PlaceholderReplaced, PlaceholderReplacementFailed,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{PredicateNode, ProcessorNode, TransformNode};

pub fn set_predicate_placeholder(
    root: &Arc<dyn PredicateNode>,
    patch: &ConfigSection,
    ctx: &mut BuildContext,
) -> Result<(Arc<dyn PredicateNode>, bool), BuildError> {
    replace(root, root.path(), patch, ctx, |ctx| root.set_placeholder(patch, ctx))
}

pub fn set_transform_placeholder(
    root: &Arc<dyn TransformNode>,
    patch: &ConfigSection,
    ctx: &mut BuildContext,
) -> Result<(Arc<dyn TransformNode>, bool), BuildError> {
    replace(root, root.path(), patch, ctx, |ctx| root.set_placeholder(patch, ctx))
}

pub fn set_processor_placeholder(
    root: &Arc<dyn ProcessorNode>,
    patch: &ConfigSection,
    ctx: &mut BuildContext,
) -> Result<(Arc<dyn ProcessorNode>, bool), BuildError> {
    replace(root, root.path(), patch, ctx, |ctx| root.set_placeholder(patch, ctx))
}

fn replace<N: ?Sized>(
    root: &Arc<N>,
    root_path: &ConfigPath,
    patch: &ConfigSection,
    ctx: &mut BuildContext,
    set: impl FnOnce(&mut BuildContext) -> Result<Option<Arc<N>>, BuildError>,
) -> Result<(Arc<N>, bool), BuildError> {
    let placeholder = patch.path().parent().unwrap_or_default();
    let within = patch.path().is_descendant_of(root_path);
    let outcome = if within { set(ctx) } else { Ok(None) };

    match outcome {
        Ok(Some(new_root)) => {
            PlaceholderReplaced {
                placeholder: &placeholder,
                target: patch.path(),
            }
            .log();
            Ok((new_root, true))
        }
        Ok(None) => {
            PlaceholderNotFound {
                root: root_path,
                target: patch.path(),
            }
            .log();
            Ok((root.clone(), false))
        }
        Err(error) => {
            PlaceholderReplacementFailed {
                placeholder: &placeholder,
                error: &error,
            }
            .log();
            ctx.error(error.clone());
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Services, TypeRegistry};
    use crate::object::Object;

    fn context() -> BuildContext {
        BuildContext::new(Arc::new(TypeRegistry::with_builtins()))
    }

    fn patch(path: &str, yaml: &str) -> ConfigSection {
        ConfigSection::from_yaml_str(path, yaml).unwrap()
    }

    #[test]
    fn test_patch_outside_root_returns_same_reference() {
        let mut ctx = context();
        let root = ctx
            .build_predicate(&patch("Root", "Predicates: [Placeholder, true]\n"))
            .unwrap();

        let (same, changed) =
            set_predicate_placeholder(&root, &patch("Other:0:X", "true"), &mut ctx).unwrap();
        assert!(!changed);
        assert!(Arc::ptr_eq(&same, &root));

        let (same, changed) =
            set_predicate_placeholder(&root, &patch("Root:Predicates:1:X", "true"), &mut ctx).unwrap();
        assert!(!changed);
        assert!(Arc::ptr_eq(&same, &root));
    }

    #[tokio::test]
    async fn test_root_placeholder_is_replaced() {
        let mut ctx = context();
        let root = ctx.build_predicate(&patch("Root", "Placeholder")).unwrap();
        assert!(root.create_predicate(&Services::new()).is_none());

        let (replaced, changed) = set_predicate_placeholder(
            &root,
            &patch("Root:Contains", "{ Type: Contains, Text: abc }"),
            &mut ctx,
        )
        .unwrap();
        assert!(changed);
        let predicate = replaced.create_predicate(&Services::new()).unwrap();
        assert!(predicate.evaluate(&Object::from("xabcx")).await);
    }

    #[test]
    fn test_failed_replacement_is_an_error_and_recorded() {
        let mut ctx = context();
        let root = ctx.build_transform(&patch("Root", "Placeholder")).unwrap();

        let result = set_transform_placeholder(&root, &patch("Root:Bad", "Type: Nope"), &mut ctx);
        assert!(matches!(result, Err(BuildError::UnknownType { .. })));
        assert!(ctx.diagnostics().has_errors());
    }
}
