// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::config::ConfigSection;
use crate::errors::BuildError;
use crate::executable::Transform;
use crate::object::Object;

pub const MODE_KEY: &str = "Mode";

/// Words kept lowercase by title case, unless they open the text.
const TITLE_SMALL_WORDS: [&str; 14] = [
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
    /// First letter of each word capitalized.
    Proper,
    /// Proper case except for small words (articles, conjunctions, prepositions).
    Title,
}

impl CaseMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "upper" => Some(CaseMode::Upper),
            "lower" => Some(CaseMode::Lower),
            "proper" => Some(CaseMode::Proper),
            "title" => Some(CaseMode::Title),
            _ => None,
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Proper => "proper",
            CaseMode::Title => "title",
        };
        f.write_str(name)
    }
}

/// Change Text Case transform - converts text to different cases
#[derive(Debug, Clone, Copy)]
pub struct ChangeTextCase {
    mode: CaseMode,
}

impl ChangeTextCase {
    pub fn new(mode: CaseMode) -> Self {
        Self { mode }
    }

    /// Read `Mode` (`upper`, `lower`, `proper` or `title`) from a section.
    pub fn from_config(section: &ConfigSection) -> Result<Self, BuildError> {
        let name = section.get_str(MODE_KEY).ok_or_else(|| BuildError::MissingSection {
            path: section.path().clone(),
            key: MODE_KEY,
        })?;
        let mode = CaseMode::parse(&name).ok_or_else(|| BuildError::InvalidValue {
            path: section.path().clone(),
            key: MODE_KEY.to_string(),
            value: name.clone(),
            expected: "one of upper, lower, proper, title",
        })?;
        Ok(Self::new(mode))
    }

    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    pub fn convert(&self, input: &str) -> String {
        match self.mode {
            CaseMode::Upper => input.to_uppercase(),
            CaseMode::Lower => input.to_lowercase(),
            CaseMode::Proper => input
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            CaseMode::Title => input
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let lower_word = word.to_lowercase();
                    if i == 0 || !TITLE_SMALL_WORDS.contains(&lower_word.as_str()) {
                        capitalize(word)
                    } else {
                        lower_word
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Non-text objects pass through unchanged.
    pub fn into_transform(self) -> Transform {
        Transform::from_fn(move |obj| match obj.as_text() {
            Some(text) => Object::from(self.convert(text)),
            None => obj.clone(),
        })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
