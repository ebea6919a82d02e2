// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod configured;
mod placeholder;

pub use configured::ConfiguredProcessor;
pub use placeholder::PlaceholderProcessor;
