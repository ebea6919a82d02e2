// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Opaque runtime objects handed to predicates, transforms and processors.
//!
//! The engine never looks inside an [`Object`]; only leaves do, through
//! [`Object::downcast_ref`]. Cloning is a reference-count bump, so executables
//! take objects by value on the async path without copying the payload.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared, type-erased handle to any `Send + Sync` value.
///
/// # Examples
///
/// ```
/// use the_sifter::Object;
///
/// let obj = Object::from("hello");
/// assert_eq!(obj.downcast_ref::<String>().map(String::as_str), Some("hello"));
/// assert!(obj.downcast_ref::<u32>().is_none());
/// ```
#[derive(Clone)]
pub struct Object(Arc<dyn Any + Send + Sync>);

impl Object {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Text view of objects holding a `String`.
    pub fn as_text(&self) -> Option<&str> {
        self.downcast_ref::<String>().map(String::as_str)
    }

    /// True when both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.debug_tuple("Object").field(&text).finish(),
            None => f.write_str("Object(<opaque>)"),
        }
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
