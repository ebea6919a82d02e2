// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::config::ConfigPath;

/// Errors raised while loading a configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported configuration format '{0}'")]
    UnsupportedFormat(String),
}

/// Recoverable configuration issues. The builder corrects them and goes on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    #[error("Both Any and AtLeast are specified at '{path}': Any wins (AtLeast = 1).")]
    AnyOverridesAtLeast { path: ConfigPath },

    #[error("Single is specified with Any/AtLeast/AtMost at '{path}': Single wins (AtLeast = AtMost = 1).")]
    SingleOverridesCounts { path: ConfigPath },

    #[error("AtLeast ({at_least}) is greater than or equal to the number of items ({count}) at '{path}': using All.")]
    AtLeastClamped {
        path: ConfigPath,
        at_least: usize,
        count: usize,
    },

    #[error("Keys [{}] are ignored by type '{type_name}' at '{path}'.", keys.join(", "))]
    IgnoredKeys {
        path: ConfigPath,
        type_name: String,
        keys: Vec<String>,
    },
}

impl ConfigWarning {
    pub fn path(&self) -> &ConfigPath {
        match self {
            ConfigWarning::AnyOverridesAtLeast { path }
            | ConfigWarning::SingleOverridesCounts { path }
            | ConfigWarning::AtLeastClamped { path, .. }
            | ConfigWarning::IgnoredKeys { path, .. } => path,
        }
    }
}
