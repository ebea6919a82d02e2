// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use crate::backends::local::predicates::{MatchKind, TextMatch};
use crate::config::ConfigSection;
use crate::errors::BuildError;
use crate::executable::Predicate;
use crate::object::Object;

/// A test over text that needs to await something before answering
/// (a lookup, a remote call).
#[async_trait]
pub trait AsyncTextTest: Send + Sync {
    async fn test(&self, text: &str) -> bool;
}

/// `Contains` that always suspends once before answering.
#[derive(Debug, Clone)]
pub struct AsyncContains {
    inner: TextMatch,
}

impl AsyncContains {
    pub fn new(inner: TextMatch) -> Self {
        Self { inner }
    }

    pub fn from_config(section: &ConfigSection) -> Result<Self, BuildError> {
        TextMatch::from_config(MatchKind::Contains, section).map(Self::new)
    }
}

#[async_trait]
impl AsyncTextTest for AsyncContains {
    async fn test(&self, text: &str) -> bool {
        tokio::task::yield_now().await;
        self.inner.matches(text)
    }
}

/// Asynchronous predicate over an [`AsyncTextTest`]. Non-text objects are `false`.
pub fn async_text_predicate(test: Arc<dyn AsyncTextTest>) -> Predicate {
    Predicate::from_async(move |obj: Object| {
        let test = test.clone();
        async move {
            match obj.as_text() {
                Some(text) => test.test(text).await,
                None => false,
            }
        }
    })
}
