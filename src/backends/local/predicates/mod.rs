// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod async_contains;
pub mod text_match;

pub use async_contains::{async_text_predicate, AsyncContains, AsyncTextTest};
pub use text_match::{is_text, MatchKind, TextMatch};
