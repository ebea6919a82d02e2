// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::executable::ExecutionCapability;
use crate::object::Object;

pub type SyncTransformFn = Arc<dyn Fn(&Object) -> Object + Send + Sync>;
pub type AsyncTransformFn = Arc<dyn Fn(Object) -> BoxFuture<'static, Object> + Send + Sync>;

/// A compiled object → object mapping.
///
/// The identity mapping is never materialized: it is `Option::<Transform>::None`
/// everywhere, and callers skip the call entirely.
#[derive(Clone)]
pub enum Transform {
    Sync(SyncTransformFn),
    Async(AsyncTransformFn),
}

impl Transform {
    pub fn from_fn<F>(map: F) -> Self
    where
        F: Fn(&Object) -> Object + Send + Sync + 'static,
    {
        Transform::Sync(Arc::new(map))
    }

    pub fn from_async<F, Fut>(map: F) -> Self
    where
        F: Fn(Object) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Object> + Send + 'static,
    {
        Transform::Async(Arc::new(move |obj| map(obj).boxed()))
    }

    pub fn capability(&self) -> ExecutionCapability {
        match self {
            Transform::Sync(_) => ExecutionCapability::SyncOnly,
            Transform::Async(_) => ExecutionCapability::AsyncRequired,
        }
    }

    pub fn is_sync(&self) -> bool {
        matches!(self, Transform::Sync(_))
    }

    pub fn as_sync(&self) -> Option<&SyncTransformFn> {
        match self {
            Transform::Sync(map) => Some(map),
            Transform::Async(_) => None,
        }
    }

    pub async fn apply(&self, obj: Object) -> Object {
        match self {
            Transform::Sync(map) => map(&obj),
            Transform::Async(map) => map(obj).await,
        }
    }

    pub fn into_async(self) -> Self {
        match self {
            Transform::Sync(map) => {
                Transform::Async(Arc::new(move |obj| future::ready(map(&obj)).boxed()))
            }
            asynchronous => asynchronous,
        }
    }

    /// `self` first, then `next`.
    pub fn then(self, next: Transform) -> Self {
        match (self, next) {
            (Transform::Sync(first), Transform::Sync(second)) => {
                Transform::Sync(Arc::new(move |obj| second(&first(obj))))
            }
            (Transform::Sync(first), Transform::Async(second)) => {
                Transform::Async(Arc::new(move |obj| second(first(&obj))))
            }
            (Transform::Async(first), Transform::Sync(second)) => Transform::Async(Arc::new(
                move |obj| {
                    let second = second.clone();
                    first(obj).map(move |mid| second(&mid)).boxed()
                },
            )),
            (Transform::Async(first), Transform::Async(second)) => Transform::Async(Arc::new(
                move |obj| {
                    let pending = first(obj);
                    let second = second.clone();
                    async move { second(pending.await).await }.boxed()
                },
            )),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Sync(_) => f.write_str("Transform::Sync"),
            Transform::Async(_) => f.write_str("Transform::Async"),
        }
    }
}

/// Compose an intrinsic transform with a configured one: intrinsic runs first.
///
/// # Examples
///
/// ```
/// use the_sifter::executable::transform::compose;
/// use the_sifter::{Object, Transform};
///
/// assert!(compose(None, None).is_none());
///
/// let upper = Transform::from_fn(|o: &Object| Object::from(o.as_text().unwrap_or("").to_uppercase()));
/// let bang = Transform::from_fn(|o: &Object| Object::from(format!("{}!", o.as_text().unwrap_or(""))));
/// let both = compose(Some(upper), Some(bang)).unwrap();
/// let out = both.as_sync().unwrap()(&Object::from("hi"));
/// assert_eq!(out.as_text(), Some("HI!"));
/// ```
pub fn compose(intrinsic: Option<Transform>, configured: Option<Transform>) -> Option<Transform> {
    match (intrinsic, configured) {
        (Some(first), Some(second)) => Some(first.then(second)),
        (only, None) | (None, only) => only,
    }
}

/// Apply every transform in order. An empty list is the identity (`None`).
pub fn sequence(items: Vec<Transform>) -> Option<Transform> {
    if items.len() <= 1 {
        return items.into_iter().next();
    }
    if items.iter().all(Transform::is_sync) {
        let maps: Arc<[SyncTransformFn]> = items
            .into_iter()
            .filter_map(|item| item.as_sync().cloned())
            .collect();
        return Some(Transform::Sync(Arc::new(move |obj| {
            maps.iter().fold(obj.clone(), |current, map| map(&current))
        })));
    }
    let items: Arc<[Transform]> = items.into();
    Some(Transform::Async(Arc::new(move |obj| {
        let items = items.clone();
        async move {
            let mut current = obj;
            for item in items.iter() {
                current = item.apply(current).await;
            }
            current
        }
        .boxed()
    })))
}
