// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::consts::{
    DEFAULT_PREDICATE_ITEMS_KEY, DEFAULT_PROCESSOR_ITEMS_KEY, DEFAULT_TRANSFORM_ITEMS_KEY,
};
use crate::config::ConfigSection;
use crate::errors::ConfigError;

/// Options of a build session.
///
/// Every field is optional in the document and falls back to its default.
///
/// # Fields
/// * `predicate_items_key` - key holding group items (default `Predicates`;
///   filter-style documents use `Filters`)
/// * `transform_items_key` - key holding sequence items (default `Transforms`)
/// * `processor_items_key` - key holding child processors (default `Processors`)
///
/// # Example
/// ```yaml
/// predicate_items_key: Filters
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    pub predicate_items_key: String,
    pub transform_items_key: String,
    pub processor_items_key: String,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            predicate_items_key: DEFAULT_PREDICATE_ITEMS_KEY.to_string(),
            transform_items_key: DEFAULT_TRANSFORM_ITEMS_KEY.to_string(),
            processor_items_key: DEFAULT_PROCESSOR_ITEMS_KEY.to_string(),
        }
    }
}

impl BuilderOptions {
    /// Read options stored in a configuration section.
    pub fn from_section(section: &ConfigSection) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_value(section.value().clone())?)
    }
}

/// Load a configuration document as the section `root_key`.
///
/// The format follows the file extension: `.yaml`/`.yml`, `.json` or `.toml`.
pub fn load_config_file<P: AsRef<Path>>(path: P, root_key: &str) -> Result<ConfigSection, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "yaml" | "yml" => ConfigSection::from_yaml_str(root_key, &text),
        "json" => ConfigSection::from_json_str(root_key, &text),
        "toml" => ConfigSection::from_toml_str(root_key, &text),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}
