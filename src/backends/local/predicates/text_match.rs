// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConfigSection;
use crate::errors::BuildError;
use crate::executable::Predicate;

pub const TEXT_KEY: &str = "Text";
pub const IGNORE_CASE_KEY: &str = "IgnoreCase";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Contains,
    StartsWith,
    EndsWith,
}

/// Substring test over text objects. Non-text objects never match.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    kind: MatchKind,
    text: String,
    ignore_case: bool,
}

impl TextMatch {
    pub fn new(kind: MatchKind, text: impl Into<String>, ignore_case: bool) -> Self {
        let text = text.into();
        let text = if ignore_case { text.to_lowercase() } else { text };
        Self {
            kind,
            text,
            ignore_case,
        }
    }

    /// Read `Text` (required) and `IgnoreCase` (default `false`).
    pub fn from_config(kind: MatchKind, section: &ConfigSection) -> Result<Self, BuildError> {
        let text = section.get_str(TEXT_KEY).ok_or_else(|| BuildError::MissingSection {
            path: section.path().clone(),
            key: TEXT_KEY,
        })?;
        let ignore_case = section.get_bool(IGNORE_CASE_KEY)?.unwrap_or(false);
        Ok(Self::new(kind, text, ignore_case))
    }

    pub fn matches(&self, input: &str) -> bool {
        let lowered;
        let input = if self.ignore_case {
            lowered = input.to_lowercase();
            lowered.as_str()
        } else {
            input
        };
        match self.kind {
            MatchKind::Contains => input.contains(&self.text),
            MatchKind::StartsWith => input.starts_with(&self.text),
            MatchKind::EndsWith => input.ends_with(&self.text),
        }
    }

    pub fn into_predicate(self) -> Predicate {
        Predicate::from_fn(move |obj| obj.as_text().map_or(false, |text| self.matches(text)))
    }
}

/// True for objects holding text.
pub fn is_text() -> Predicate {
    Predicate::from_fn(|obj| obj.as_text().is_some())
}
