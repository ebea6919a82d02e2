// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConfigPath;
use crate::object::Object;

/// Observer of evaluations, attached with `create_hook`.
///
/// Every callback defaults to doing nothing. Hooks see the node path and the
/// input (and result), and cannot change either.
pub trait HookContext: Send + Sync {
    fn on_before_predicate(&self, _path: &ConfigPath, _input: &Object) {}

    fn on_after_predicate(&self, _path: &ConfigPath, _input: &Object, _result: bool) {}

    fn on_before_transform(&self, _path: &ConfigPath, _input: &Object) {}

    fn on_after_transform(&self, _path: &ConfigPath, _input: &Object, _output: &Object) {}

    fn on_before_process(&self, _path: &ConfigPath, _input: &Object) {}

    fn on_after_process(&self, _path: &ConfigPath, _input: &Object, _output: Option<&Object>) {}
}
