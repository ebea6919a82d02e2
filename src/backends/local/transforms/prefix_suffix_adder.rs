// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConfigSection;
use crate::executable::Transform;
use crate::object::Object;

pub const PREFIX_KEY: &str = "Prefix";
pub const SUFFIX_KEY: &str = "Suffix";

/// Prefix/Suffix Adder transform - adds prefix and/or suffix to text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefixSuffixAdder {
    prefix: Option<String>,
    suffix: Option<String>,
}

impl PrefixSuffixAdder {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self { prefix, suffix }
    }

    pub fn with_prefix_and_suffix(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(Some(prefix.into()), Some(suffix.into()))
    }

    /// Both keys are optional; a missing one adds nothing.
    pub fn from_config(section: &ConfigSection) -> Self {
        Self::new(section.get_str(PREFIX_KEY), section.get_str(SUFFIX_KEY))
    }

    pub fn decorate(&self, input: &str) -> String {
        format!(
            "{}{}{}",
            self.prefix.as_deref().unwrap_or(""),
            input,
            self.suffix.as_deref().unwrap_or("")
        )
    }

    pub fn into_transform(self) -> Transform {
        Transform::from_fn(move |obj| match obj.as_text() {
            Some(text) => Object::from(self.decorate(text)),
            None => obj.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_suffix_from_config() {
        let test_cases = vec![
            ("Prefix: '>> '\nSuffix: ' <<'", "hello", ">> hello <<"),
            ("Prefix: '['", "hello", "[hello"),
            ("suffix: '!'", "hello", "hello!"),
            ("{}", "hello", "hello"),
        ];

        for (yaml, input, expected) in test_cases {
            let section = ConfigSection::from_yaml_str("Root", yaml).unwrap();
            assert_eq!(PrefixSuffixAdder::from_config(&section).decorate(input), expected, "{}", yaml);
        }
    }

    #[test]
    fn test_with_prefix_and_suffix() {
        let adder = PrefixSuffixAdder::with_prefix_and_suffix("<", ">");
        assert_eq!(adder.decorate("x"), "<x>");
    }
}
