// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod build;
mod config;
mod diagnostics;

pub use build::BuildError;
pub use config::{ConfigError, ConfigWarning};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
