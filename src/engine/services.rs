// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::executable::{Predicate, Transform};

/// How leaves hand out their executables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Leaves keep their natural shape; synchronous subtrees stay synchronous.
    #[default]
    Hybrid,
    /// Every leaf is lifted to its asynchronous form, so the whole tree runs
    /// through the async combinators.
    ForceAsync,
}

impl ExecutionMode {
    pub fn predicate(self, predicate: Predicate) -> Predicate {
        match self {
            ExecutionMode::Hybrid => predicate,
            ExecutionMode::ForceAsync => predicate.into_async(),
        }
    }

    pub fn transform(self, transform: Transform) -> Transform {
        match self {
            ExecutionMode::Hybrid => transform,
            ExecutionMode::ForceAsync => transform.into_async(),
        }
    }
}

/// Services made available to nodes when they compile.
///
/// A small type-keyed container: leaves that need a collaborator look it up
/// by type.
///
/// # Examples
///
/// ```
/// use the_sifter::engine::{ExecutionMode, Services};
///
/// struct Threshold(usize);
///
/// let services = Services::new()
///     .with(Threshold(3))
///     .with_execution_mode(ExecutionMode::ForceAsync);
///
/// assert_eq!(services.get::<Threshold>().map(|t| t.0), Some(3));
/// assert!(services.get::<String>().is_none());
/// assert_eq!(services.execution_mode(), ExecutionMode::ForceAsync);
/// ```
#[derive(Clone, Default)]
pub struct Services {
    entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    mode: ExecutionMode,
}

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Any + Send + Sync>(&mut self, service: T) {
        self.entries.insert(TypeId::of::<T>(), Arc::new(service));
    }

    pub fn with<T: Any + Send + Sync>(mut self, service: T) -> Self {
        self.insert(service);
        self
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|service| service.clone().downcast::<T>().ok())
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("service_count", &self.entries.len())
            .field("mode", &self.mode)
            .finish()
    }
}
