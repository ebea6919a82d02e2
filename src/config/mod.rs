// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod consts;
mod integration_tests;
mod loader;
mod path;
mod section;

pub use loader::{load_config_file, BuilderOptions};
pub use path::ConfigPath;
pub use section::ConfigSection;
