// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::predicates::{async_text_predicate, is_text, AsyncContains, MatchKind, TextMatch};
use crate::backends::local::transforms::{async_reverse_text, reverse_text, ChangeTextCase, PrefixSuffixAdder};
use crate::config::ConfigSection;
use crate::engine::{BuildContext, TypeRegistry};
use crate::errors::BuildError;
use crate::executable::{Predicate, Transform};
use crate::nodes::predicates::LeafPredicate;
use crate::nodes::transforms::LeafTransform;
use crate::traits::{Intrinsic, PredicateNode, TransformNode};

/// Register the built-in (in-process) text library.
///
/// Predicates:
/// - "Contains", "StartsWith", "EndsWith" -> [`TextMatch`] (`Text`, `IgnoreCase`)
/// - "IsText" -> true for text objects
/// - "AsyncContains" -> [`AsyncContains`], suspends once before answering
///
/// Transforms:
/// - "ChangeTextCase" -> [`ChangeTextCase`] (`Mode`: upper, lower, proper, title)
/// - "ReverseText", "AsyncReverseText"
/// - "PrefixSuffixAdder" -> [`PrefixSuffixAdder`] (`Prefix`, `Suffix`)
///
/// Processor kinds (intrinsic behavior):
/// - "Text" -> condition IsText
/// - "ChangeTextCase" -> condition IsText, case transform
/// - "ReverseText" -> condition IsText, reverse transform
pub fn register_builtins(registry: &mut TypeRegistry) {
    for (name, kind) in [
        ("Contains", MatchKind::Contains),
        ("StartsWith", MatchKind::StartsWith),
        ("EndsWith", MatchKind::EndsWith),
    ] {
        registry.register_predicate(name, move |section, _| {
            let test = TextMatch::from_config(kind, section)?;
            Ok(leaf_predicate(section, name, test.into_predicate()))
        });
    }
    registry
        .register_predicate("IsText", |section, _| Ok(leaf_predicate(section, "IsText", is_text())))
        .register_predicate("AsyncContains", |section, _| {
            let test = AsyncContains::from_config(section)?;
            Ok(leaf_predicate(section, "AsyncContains", async_text_predicate(Arc::new(test))))
        });

    registry
        .register_transform("ChangeTextCase", |section, _| {
            let change = ChangeTextCase::from_config(section)?;
            Ok(leaf_transform(section, "ChangeTextCase", change.into_transform()))
        })
        .register_transform("ReverseText", |section, _| {
            Ok(leaf_transform(section, "ReverseText", reverse_text()))
        })
        .register_transform("AsyncReverseText", |section, _| {
            Ok(leaf_transform(section, "AsyncReverseText", async_reverse_text()))
        })
        .register_transform("PrefixSuffixAdder", |section, _| {
            let adder = PrefixSuffixAdder::from_config(section);
            Ok(leaf_transform(section, "PrefixSuffixAdder", adder.into_transform()))
        });

    registry
        .register_processor("Text", |_, _| Ok(Intrinsic::condition(is_text())))
        .register_processor("ChangeTextCase", change_text_case_kind)
        .register_processor("ReverseText", |_, _| {
            Ok(Intrinsic::new(Some(is_text()), Some(reverse_text())))
        });
}

fn change_text_case_kind(section: &ConfigSection, _ctx: &mut BuildContext) -> Result<Intrinsic, BuildError> {
    let change = ChangeTextCase::from_config(section)?;
    Ok(Intrinsic::new(Some(is_text()), Some(change.into_transform())))
}

fn leaf_predicate(section: &ConfigSection, type_name: &str, predicate: Predicate) -> Arc<dyn PredicateNode> {
    Arc::new(LeafPredicate::new(section.path().clone(), type_name, predicate))
}

fn leaf_transform(section: &ConfigSection, type_name: &str, transform: Transform) -> Arc<dyn TransformNode> {
    Arc::new(LeafTransform::new(section.path().clone(), type_name, transform))
}
