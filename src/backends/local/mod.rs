// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod predicates;
pub mod transforms;

pub use factory::register_builtins;
