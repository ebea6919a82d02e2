// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::backends::local;
use crate::config::ConfigSection;
use crate::engine::BuildContext;
use crate::errors::BuildError;
use crate::traits::{Intrinsic, NodeFactory, NodeFamily, PredicateNode, TransformNode};

pub type PredicateConstructor = Arc<
    dyn Fn(&ConfigSection, &mut BuildContext) -> Result<Arc<dyn PredicateNode>, BuildError>
        + Send
        + Sync,
>;
pub type TransformConstructor = Arc<
    dyn Fn(&ConfigSection, &mut BuildContext) -> Result<Arc<dyn TransformNode>, BuildError>
        + Send
        + Sync,
>;
pub type IntrinsicConstructor =
    Arc<dyn Fn(&ConfigSection, &mut BuildContext) -> Result<Intrinsic, BuildError> + Send + Sync>;

/// One registered type: the name as registered plus its constructor.
struct Entry<C> {
    name: String,
    constructor: C,
}

/// Name → constructor table implementing [`NodeFactory`].
///
/// Names are matched ASCII case-insensitively, like every other configuration
/// key. Registering a name twice replaces the earlier constructor.
///
/// # Examples
///
/// ```
/// use the_sifter::engine::TypeRegistry;
/// use the_sifter::traits::NodeFamily;
///
/// let registry = TypeRegistry::with_builtins();
/// assert!(registry.is_implementation_available(NodeFamily::Predicate, "contains"));
/// assert!(registry.is_implementation_available(NodeFamily::Processor, "ChangeTextCase"));
/// assert!(!registry.is_implementation_available(NodeFamily::Transform, "Contains"));
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    predicates: BTreeMap<String, Entry<PredicateConstructor>>,
    transforms: BTreeMap<String, Entry<TransformConstructor>>,
    processors: BTreeMap<String, Entry<IntrinsicConstructor>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in text predicates, transforms and processor kinds.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        local::register_builtins(&mut registry);
        registry
    }

    pub fn register_predicate<F>(&mut self, name: &str, constructor: F) -> &mut Self
    where
        F: Fn(&ConfigSection, &mut BuildContext) -> Result<Arc<dyn PredicateNode>, BuildError>
            + Send
            + Sync
            + 'static,
    {
        let constructor: PredicateConstructor = Arc::new(constructor);
        self.predicates.insert(key(name), entry(name, constructor));
        self
    }

    pub fn register_transform<F>(&mut self, name: &str, constructor: F) -> &mut Self
    where
        F: Fn(&ConfigSection, &mut BuildContext) -> Result<Arc<dyn TransformNode>, BuildError>
            + Send
            + Sync
            + 'static,
    {
        let constructor: TransformConstructor = Arc::new(constructor);
        self.transforms.insert(key(name), entry(name, constructor));
        self
    }

    /// Register a processor kind by the intrinsic behavior it contributes.
    pub fn register_processor<F>(&mut self, name: &str, constructor: F) -> &mut Self
    where
        F: Fn(&ConfigSection, &mut BuildContext) -> Result<Intrinsic, BuildError> + Send + Sync + 'static,
    {
        let constructor: IntrinsicConstructor = Arc::new(constructor);
        self.processors.insert(key(name), entry(name, constructor));
        self
    }

    /// Registered type names of a family, sorted case-insensitively.
    pub fn list_available_implementations(&self, family: NodeFamily) -> Vec<&str> {
        match family {
            NodeFamily::Predicate => self.predicates.values().map(|e| e.name.as_str()).collect(),
            NodeFamily::Transform => self.transforms.values().map(|e| e.name.as_str()).collect(),
            NodeFamily::Processor => self.processors.values().map(|e| e.name.as_str()).collect(),
        }
    }

    pub fn is_implementation_available(&self, family: NodeFamily, name: &str) -> bool {
        let name = key(name);
        match family {
            NodeFamily::Predicate => self.predicates.contains_key(&name),
            NodeFamily::Transform => self.transforms.contains_key(&name),
            NodeFamily::Processor => self.processors.contains_key(&name),
        }
    }
}

impl NodeFactory for TypeRegistry {
    fn create_predicate(
        &self,
        type_name: &str,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Arc<dyn PredicateNode>, BuildError> {
        match self.predicates.get(&key(type_name)) {
            Some(entry) => (entry.constructor)(section, ctx),
            None => Err(unknown(NodeFamily::Predicate, type_name, section)),
        }
    }

    fn create_transform(
        &self,
        type_name: &str,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Arc<dyn TransformNode>, BuildError> {
        match self.transforms.get(&key(type_name)) {
            Some(entry) => (entry.constructor)(section, ctx),
            None => Err(unknown(NodeFamily::Transform, type_name, section)),
        }
    }

    fn create_intrinsic(
        &self,
        type_name: &str,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Intrinsic, BuildError> {
        match self.processors.get(&key(type_name)) {
            Some(entry) => (entry.constructor)(section, ctx),
            None => Err(unknown(NodeFamily::Processor, type_name, section)),
        }
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("predicates", &self.list_available_implementations(NodeFamily::Predicate))
            .field("transforms", &self.list_available_implementations(NodeFamily::Transform))
            .field("processors", &self.list_available_implementations(NodeFamily::Processor))
            .finish()
    }
}

fn key(name: &str) -> String {
    name.to_ascii_lowercase()
}

fn entry<C>(name: &str, constructor: C) -> Entry<C> {
    Entry {
        name: name.to_string(),
        constructor,
    }
}

fn unknown(family: NodeFamily, type_name: &str, section: &ConfigSection) -> BuildError {
    BuildError::UnknownType {
        family,
        type_name: type_name.to_string(),
        path: section.path().clone(),
    }
}
