// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::config::consts::PATH_SEPARATOR;

/// Colon-separated address of a configuration section, e.g. `Root:Predicates:1`.
///
/// Paths identify nodes. Comparison is ASCII case-insensitive, matching the
/// case-insensitive configuration keys.
///
/// # Examples
///
/// ```
/// use the_sifter::config::ConfigPath;
///
/// let root = ConfigPath::new("Root");
/// let item = root.child("Predicates").child("1");
/// assert_eq!(item.as_str(), "Root:Predicates:1");
/// assert_eq!(item.key(), "1");
/// assert!(item.is_descendant_of(&root));
/// assert!(!root.is_descendant_of(&item));
/// assert_eq!(item.parent(), Some(ConfigPath::new("root:predicates")));
/// ```
#[derive(Clone, Default)]
pub struct ConfigPath(String);

impl ConfigPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, key: &str) -> ConfigPath {
        if self.0.is_empty() {
            ConfigPath(key.to_string())
        } else {
            ConfigPath(format!("{}{}{}", self.0, PATH_SEPARATOR, key))
        }
    }

    /// Last segment of the path.
    pub fn key(&self) -> &str {
        match self.0.rfind(PATH_SEPARATOR) {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        }
    }

    pub fn parent(&self) -> Option<ConfigPath> {
        self.0
            .rfind(PATH_SEPARATOR)
            .map(|index| ConfigPath(self.0[..index].to_string()))
    }

    /// Strict descendant test on whole segments (`A:B` is not under `A:Bc`).
    pub fn is_descendant_of(&self, ancestor: &ConfigPath) -> bool {
        if ancestor.0.is_empty() {
            return !self.0.is_empty();
        }
        let prefix_len = ancestor.0.len();
        self.0.len() > prefix_len
            && self.0.is_char_boundary(prefix_len)
            && self.0[..prefix_len].eq_ignore_ascii_case(&ancestor.0)
            && self.0[prefix_len..].starts_with(PATH_SEPARATOR)
    }

    pub fn is_child_of(&self, parent: &ConfigPath) -> bool {
        self.parent().map_or(false, |p| &p == parent)
    }
}

impl PartialEq for ConfigPath {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ConfigPath {}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigPath({:?})", self.0)
    }
}

impl From<&str> for ConfigPath {
    fn from(value: &str) -> Self {
        ConfigPath::new(value)
    }
}
