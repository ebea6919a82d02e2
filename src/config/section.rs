// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Path-addressable view over a configuration document.
//!
//! Sections wrap a `serde_yaml::Value` (JSON and TOML documents are converted
//! on load) together with the [`ConfigPath`] they live at. Key lookup is ASCII
//! case-insensitive and scalar values are read leniently: `"true"` and `true`
//! are the same boolean, `"2"` and `2` the same count.

use serde_yaml::Value;

use crate::config::ConfigPath;
use crate::errors::{BuildError, ConfigError};

/// A configuration section and its path.
///
/// # Examples
///
/// ```
/// use the_sifter::config::ConfigSection;
///
/// let root = ConfigSection::from_yaml_str(
///     "Root",
///     r#"{"atleast": 2, "Predicates": [{"Type": "Contains", "Text": "x"}]}"#,
/// ).unwrap();
///
/// assert_eq!(root.get_count("AtLeast").unwrap(), Some(2));
/// let items = root.items("Predicates").unwrap().unwrap();
/// assert_eq!(items[0].path().as_str(), "Root:Predicates:0");
/// assert_eq!(items[0].get_str("type").as_deref(), Some("Contains"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSection {
    path: ConfigPath,
    value: Value,
}

impl ConfigSection {
    pub fn new(path: ConfigPath, value: Value) -> Self {
        Self { path, value }
    }

    pub fn from_yaml_str(root_key: &str, text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(text)?;
        Ok(Self::new(ConfigPath::new(root_key), value))
    }

    pub fn from_json_str(root_key: &str, text: &str) -> Result<Self, ConfigError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        let value = serde_yaml::to_value(json)?;
        Ok(Self::new(ConfigPath::new(root_key), value))
    }

    pub fn from_toml_str(root_key: &str, text: &str) -> Result<Self, ConfigError> {
        let table: toml::Value = toml::from_str(text)?;
        let value = serde_yaml::to_value(table)?;
        Ok(Self::new(ConfigPath::new(root_key), value))
    }

    pub fn path(&self) -> &ConfigPath {
        &self.path
    }

    pub fn key(&self) -> &str {
        self.path.key()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_mapping(&self) -> bool {
        self.value.is_mapping()
    }

    pub fn is_sequence(&self) -> bool {
        self.value.is_sequence()
    }

    /// Scalar content rendered as text (strings, booleans and numbers).
    pub fn as_string(&self) -> Option<String> {
        scalar_to_string(&self.value)
    }

    /// Child section by key. Missing keys and null values yield `None`.
    pub fn get(&self, key: &str) -> Option<ConfigSection> {
        let child = match &self.value {
            Value::Mapping(map) => map.iter().find_map(|(k, v)| match k {
                Value::String(name) if name.eq_ignore_ascii_case(key) => Some(v),
                _ => None,
            }),
            Value::Sequence(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }?;
        if child.is_null() {
            return None;
        }
        Some(ConfigSection::new(self.path.child(key), child.clone()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys of a mapping section, in document order.
    pub fn keys(&self) -> Vec<String> {
        match &self.value {
            Value::Mapping(map) => map.keys().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        }
    }

    /// Direct children: list items (keys `0`, `1`, ...) or mapping entries.
    pub fn children(&self) -> Vec<ConfigSection> {
        match &self.value {
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| ConfigSection::new(self.path.child(&i.to_string()), v.clone()))
                .collect(),
            Value::Mapping(map) => map
                .iter()
                .filter_map(|(k, v)| {
                    let key = scalar_to_string(k)?;
                    Some(ConfigSection::new(self.path.child(&key), v.clone()))
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|s| s.as_string())
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, BuildError> {
        let Some(section) = self.get(key) else {
            return Ok(None);
        };
        match section.value() {
            Value::Bool(b) => Ok(Some(*b)),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
            other => Err(self.invalid(key, other, "a boolean")),
        }
    }

    pub fn get_count(&self, key: &str) -> Result<Option<i64>, BuildError> {
        let Some(section) = self.get(key) else {
            return Ok(None);
        };
        let parsed = match section.value() {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match parsed {
            Some(count) => Ok(Some(count)),
            None => Err(self.invalid(key, section.value(), "an integer")),
        }
    }

    /// The list stored under `key`, one section per item.
    pub fn items(&self, key: &str) -> Result<Option<Vec<ConfigSection>>, BuildError> {
        match self.get(key) {
            None => Ok(None),
            Some(list) if list.is_sequence() => Ok(Some(list.children())),
            Some(list) => Err(BuildError::NotASequence {
                path: list.path().clone(),
                key: key.to_string(),
            }),
        }
    }

    fn invalid(&self, key: &str, value: &Value, expected: &'static str) -> BuildError {
        BuildError::InvalidValue {
            path: self.path.clone(),
            key: key.to_string(),
            value: scalar_to_string(value).unwrap_or_else(|| format!("{:?}", value)),
            expected,
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(yaml: &str) -> ConfigSection {
        ConfigSection::from_yaml_str("Root", yaml).unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_keeps_requested_key() {
        let root = section("Condition:\n  Type: Contains\n  text: abc\n");
        let condition = root.get("condition").unwrap();
        assert_eq!(condition.path().as_str(), "Root:condition");
        assert_eq!(condition.get_str("TEXT").as_deref(), Some("abc"));
        assert!(root.get("Transform").is_none());
    }

    #[test]
    fn test_null_values_are_absent() {
        let root = section("Condition: ~\nAny: true\n");
        assert!(root.get("Condition").is_none());
        assert!(root.contains_key("Any"));
    }

    #[test]
    fn test_lenient_scalars() {
        let root = section("A: 'TRUE'\nB: false\nC: '3'\nD: 4\nE: maybe\nF: [1]\n");
        assert_eq!(root.get_bool("A").unwrap(), Some(true));
        assert_eq!(root.get_bool("B").unwrap(), Some(false));
        assert_eq!(root.get_count("C").unwrap(), Some(3));
        assert_eq!(root.get_count("D").unwrap(), Some(4));
        assert_eq!(root.get_bool("Missing").unwrap(), None);
        assert!(matches!(
            root.get_bool("E"),
            Err(BuildError::InvalidValue { expected: "a boolean", .. })
        ));
        assert!(root.get_count("F").is_err());
    }

    #[test]
    fn test_items_must_be_a_list() {
        let root = section("Predicates: { Type: true }\n");
        assert!(matches!(
            root.items("Predicates"),
            Err(BuildError::NotASequence { .. })
        ));
        assert!(root.items("Processors").unwrap().is_none());
    }

    #[test]
    fn test_scalar_root_and_keys() {
        let scalar = ConfigSection::from_yaml_str("Root", "true").unwrap();
        assert_eq!(scalar.as_string().as_deref(), Some("true"));
        assert!(scalar.keys().is_empty());

        let root = section("Type: All\nPredicates: []\n");
        assert_eq!(root.keys(), vec!["Type".to_string(), "Predicates".to_string()]);
    }

    #[test]
    fn test_json_and_toml_documents() {
        let json = ConfigSection::from_json_str("Root", r#"{"Type": "Any", "Predicates": []}"#).unwrap();
        assert_eq!(json.get_str("type").as_deref(), Some("Any"));

        let toml = ConfigSection::from_toml_str("Root", "Type = \"All\"\nAtLeast = 2\n").unwrap();
        assert_eq!(toml.get_count("AtLeast").unwrap(), Some(2));
    }
}
