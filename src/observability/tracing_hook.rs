// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConfigPath;
use crate::object::Object;
use crate::observability::messages::evaluation::{
    EvaluationStarted, PredicateEvaluated, ProcessorEvaluated, TransformApplied,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{HookContext, NodeFamily};

/// Hook context that reports every evaluation through `tracing`.
///
/// Starts are logged at `trace`, results at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHookContext;

impl TracingHookContext {
    pub fn new() -> Self {
        Self
    }
}

impl HookContext for TracingHookContext {
    fn on_before_predicate(&self, path: &ConfigPath, _input: &Object) {
        EvaluationStarted {
            family: NodeFamily::Predicate,
            path,
        }
        .log();
    }

    fn on_after_predicate(&self, path: &ConfigPath, _input: &Object, result: bool) {
        PredicateEvaluated { path, result }.log();
    }

    fn on_before_transform(&self, path: &ConfigPath, _input: &Object) {
        EvaluationStarted {
            family: NodeFamily::Transform,
            path,
        }
        .log();
    }

    fn on_after_transform(&self, path: &ConfigPath, input: &Object, output: &Object) {
        TransformApplied {
            path,
            same_object: input.ptr_eq(output),
        }
        .log();
    }

    fn on_before_process(&self, path: &ConfigPath, _input: &Object) {
        EvaluationStarted {
            family: NodeFamily::Processor,
            path,
        }
        .log();
    }

    fn on_after_process(&self, path: &ConfigPath, _input: &Object, output: Option<&Object>) {
        ProcessorEvaluated {
            path,
            handled: output.is_some(),
        }
        .log();
    }
}
