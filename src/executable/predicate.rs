// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::executable::ExecutionCapability;
use crate::object::Object;

/// Synchronous boolean test.
pub type SyncPredicateFn = Arc<dyn Fn(&Object) -> bool + Send + Sync>;

/// Asynchronous boolean test. The object is passed by value (a cheap clone)
/// so the returned future is `'static`.
pub type AsyncPredicateFn = Arc<dyn Fn(Object) -> BoxFuture<'static, bool> + Send + Sync>;

/// A compiled predicate: either a plain function or an async one.
///
/// The tag is decided when the predicate is built. Call sites match on it
/// instead of probing the function's shape at runtime.
///
/// # Examples
///
/// ```
/// use the_sifter::{Object, Predicate};
///
/// let p = Predicate::from_fn(|o: &Object| o.as_text().map_or(false, |t| t.contains('x')));
/// match &p {
///     Predicate::Sync(test) => assert!(test(&Object::from("xy"))),
///     Predicate::Async(_) => unreachable!("built from a plain function"),
/// }
/// ```
#[derive(Clone)]
pub enum Predicate {
    Sync(SyncPredicateFn),
    Async(AsyncPredicateFn),
}

impl Predicate {
    pub fn from_fn<F>(test: F) -> Self
    where
        F: Fn(&Object) -> bool + Send + Sync + 'static,
    {
        Predicate::Sync(Arc::new(test))
    }

    pub fn from_async<F, Fut>(test: F) -> Self
    where
        F: Fn(Object) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Predicate::Async(Arc::new(move |obj| test(obj).boxed()))
    }

    pub fn constant(value: bool) -> Self {
        Predicate::from_fn(move |_| value)
    }

    pub fn capability(&self) -> ExecutionCapability {
        match self {
            Predicate::Sync(_) => ExecutionCapability::SyncOnly,
            Predicate::Async(_) => ExecutionCapability::AsyncRequired,
        }
    }

    pub fn is_sync(&self) -> bool {
        matches!(self, Predicate::Sync(_))
    }

    pub fn as_sync(&self) -> Option<&SyncPredicateFn> {
        match self {
            Predicate::Sync(test) => Some(test),
            Predicate::Async(_) => None,
        }
    }

    /// Evaluate through either arm. Synchronous predicates run inline.
    pub async fn evaluate(&self, obj: &Object) -> bool {
        match self {
            Predicate::Sync(test) => test(obj),
            Predicate::Async(test) => test(obj.clone()).await,
        }
    }

    /// Lift a synchronous predicate onto the async arm.
    pub fn into_async(self) -> Self {
        match self {
            Predicate::Sync(test) => {
                Predicate::Async(Arc::new(move |obj| future::ready(test(&obj)).boxed()))
            }
            asynchronous => asynchronous,
        }
    }

    pub fn not(self) -> Self {
        match self {
            Predicate::Sync(test) => Predicate::Sync(Arc::new(move |obj| !test(obj))),
            Predicate::Async(test) => {
                Predicate::Async(Arc::new(move |obj| test(obj).map(|passed| !passed).boxed()))
            }
        }
    }

    /// Short-circuiting conjunction: `other` is not evaluated when `self` fails.
    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Sync(left), Predicate::Sync(right)) => {
                Predicate::Sync(Arc::new(move |obj| left(obj) && right(obj)))
            }
            (Predicate::Sync(left), Predicate::Async(right)) => {
                Predicate::Async(Arc::new(move |obj| {
                    if left(&obj) {
                        right(obj)
                    } else {
                        future::ready(false).boxed()
                    }
                }))
            }
            (Predicate::Async(left), Predicate::Sync(right)) => {
                Predicate::Async(Arc::new(move |obj| {
                    let pending = left(obj.clone());
                    let right = right.clone();
                    async move { pending.await && right(&obj) }.boxed()
                }))
            }
            (Predicate::Async(left), Predicate::Async(right)) => {
                Predicate::Async(Arc::new(move |obj| {
                    let pending = left(obj.clone());
                    let right = right.clone();
                    async move { pending.await && right(obj).await }.boxed()
                }))
            }
        }
    }

    /// Short-circuiting disjunction: `other` is not evaluated when `self` passes.
    pub fn or(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Sync(left), Predicate::Sync(right)) => {
                Predicate::Sync(Arc::new(move |obj| left(obj) || right(obj)))
            }
            (Predicate::Sync(left), Predicate::Async(right)) => {
                Predicate::Async(Arc::new(move |obj| {
                    if left(&obj) {
                        future::ready(true).boxed()
                    } else {
                        right(obj)
                    }
                }))
            }
            (Predicate::Async(left), Predicate::Sync(right)) => {
                Predicate::Async(Arc::new(move |obj| {
                    let pending = left(obj.clone());
                    let right = right.clone();
                    async move { pending.await || right(&obj) }.boxed()
                }))
            }
            (Predicate::Async(left), Predicate::Async(right)) => {
                Predicate::Async(Arc::new(move |obj| {
                    let pending = left(obj.clone());
                    let right = right.clone();
                    async move { pending.await || right(obj).await }.boxed()
                }))
            }
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Sync(_) => f.write_str("Predicate::Sync"),
            Predicate::Async(_) => f.write_str("Predicate::Async"),
        }
    }
}
