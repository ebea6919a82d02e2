// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Compiled processors: condition + transform, optionally delegating to
//! children in switch-case order.
//!
//! A processor returns `None` (the void result) when it does not handle the
//! input. Construction specializes every sync/async combination of condition,
//! transform and children so no async wrapper is introduced unless an operand
//! actually needs one.

use futures::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::sync::Arc;

use crate::executable::predicate::Predicate;
use crate::executable::transform::Transform;
use crate::executable::ExecutionCapability;
use crate::object::Object;

pub type SyncProcessFn = Arc<dyn Fn(&Object) -> Option<Object> + Send + Sync>;
pub type AsyncProcessFn =
    Arc<dyn Fn(Object) -> BoxFuture<'static, Option<Object>> + Send + Sync>;

#[derive(Clone)]
pub enum ProcessFn {
    Sync(SyncProcessFn),
    Async(AsyncProcessFn),
}

impl ProcessFn {
    pub fn is_sync(&self) -> bool {
        matches!(self, ProcessFn::Sync(_))
    }

    pub async fn run(&self, obj: Object) -> Option<Object> {
        match self {
            ProcessFn::Sync(process) => process(&obj),
            ProcessFn::Async(process) => process(obj).await,
        }
    }

    pub fn into_async(self) -> Self {
        match self {
            ProcessFn::Sync(process) => {
                ProcessFn::Async(Arc::new(move |obj| future::ready(process(&obj)).boxed()))
            }
            asynchronous => asynchronous,
        }
    }
}

/// A compiled processor.
///
/// `condition` and `transform` are the processor's own (intrinsic and
/// configured combined); `process` is the full evaluation including children.
#[derive(Clone)]
pub struct Processor {
    condition: Option<Predicate>,
    transform: Option<Transform>,
    process: ProcessFn,
}

impl Processor {
    /// Processor without children. `None` when neither part is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use the_sifter::{Object, Predicate, Processor};
    ///
    /// assert!(Processor::leaf(None, None).is_none());
    ///
    /// let only_x = Predicate::from_fn(|o: &Object| o.as_text() == Some("x"));
    /// let p = Processor::leaf(Some(only_x), None).unwrap();
    /// let process = p.process_fn();
    /// assert!(process.is_sync());
    /// ```
    pub fn leaf(condition: Option<Predicate>, transform: Option<Transform>) -> Option<Processor> {
        let process = match (&condition, &transform) {
            (None, None) => return None,
            (None, Some(Transform::Sync(map))) => {
                let map = map.clone();
                ProcessFn::Sync(Arc::new(move |obj| Some(map(obj))))
            }
            (None, Some(Transform::Async(map))) => {
                let map = map.clone();
                ProcessFn::Async(Arc::new(move |obj| map(obj).map(Some).boxed()))
            }
            (Some(Predicate::Sync(test)), None) => {
                let test = test.clone();
                ProcessFn::Sync(Arc::new(move |obj| test(obj).then(|| obj.clone())))
            }
            (Some(Predicate::Async(test)), None) => {
                let test = test.clone();
                ProcessFn::Async(Arc::new(move |obj| {
                    let pending = test(obj.clone());
                    async move { pending.await.then_some(obj) }.boxed()
                }))
            }
            (Some(Predicate::Sync(test)), Some(Transform::Sync(map))) => {
                let (test, map) = (test.clone(), map.clone());
                ProcessFn::Sync(Arc::new(move |obj| test(obj).then(|| map(obj))))
            }
            (Some(Predicate::Sync(test)), Some(Transform::Async(map))) => {
                let (test, map) = (test.clone(), map.clone());
                ProcessFn::Async(Arc::new(move |obj| {
                    if test(&obj) {
                        map(obj).map(Some).boxed()
                    } else {
                        future::ready(None).boxed()
                    }
                }))
            }
            (Some(Predicate::Async(test)), Some(Transform::Sync(map))) => {
                let (test, map) = (test.clone(), map.clone());
                ProcessFn::Async(Arc::new(move |obj| {
                    let pending = test(obj.clone());
                    let map = map.clone();
                    async move { pending.await.then(|| map(&obj)) }.boxed()
                }))
            }
            (Some(Predicate::Async(test)), Some(Transform::Async(map))) => {
                let (test, map) = (test.clone(), map.clone());
                ProcessFn::Async(Arc::new(move |obj| {
                    let pending = test(obj.clone());
                    let map = map.clone();
                    async move {
                        if pending.await {
                            Some(map(obj).await)
                        } else {
                            None
                        }
                    }
                    .boxed()
                }))
            }
        };
        Some(Processor {
            condition,
            transform,
            process,
        })
    }

    /// Switch-case processor.
    ///
    /// When the condition holds, children are tried in order and the first
    /// non-void result wins; the transform then finalizes that result. With no
    /// children this is [`Processor::leaf`].
    pub fn switch(
        condition: Option<Predicate>,
        transform: Option<Transform>,
        children: Vec<Processor>,
    ) -> Option<Processor> {
        if children.is_empty() {
            return Processor::leaf(condition, transform);
        }
        let steps: Vec<ProcessFn> = children.into_iter().map(|c| c.process).collect();

        let all_sync = steps.iter().all(ProcessFn::is_sync)
            && condition.as_ref().map_or(true, Predicate::is_sync)
            && transform.as_ref().map_or(true, Transform::is_sync);

        let process = if all_sync {
            let test = condition.as_ref().and_then(|c| c.as_sync().cloned());
            let map = transform.as_ref().and_then(|t| t.as_sync().cloned());
            let steps: Arc<[SyncProcessFn]> = steps
                .into_iter()
                .filter_map(|step| match step {
                    ProcessFn::Sync(process) => Some(process),
                    ProcessFn::Async(_) => None,
                })
                .collect();
            ProcessFn::Sync(Arc::new(move |obj| {
                if let Some(test) = &test {
                    if !test(obj) {
                        return None;
                    }
                }
                let produced = steps.iter().find_map(|step| step(obj))?;
                Some(match &map {
                    Some(map) => map(&produced),
                    None => produced,
                })
            }))
        } else {
            let test = condition.clone();
            let map = transform.clone();
            let steps: Arc<[ProcessFn]> = steps.into();
            ProcessFn::Async(Arc::new(move |obj| {
                let (test, map, steps) = (test.clone(), map.clone(), steps.clone());
                async move {
                    if let Some(test) = &test {
                        if !test.evaluate(&obj).await {
                            return None;
                        }
                    }
                    for step in steps.iter() {
                        if let Some(produced) = step.run(obj.clone()).await {
                            return Some(match &map {
                                Some(map) => map.apply(produced).await,
                                None => produced,
                            });
                        }
                    }
                    None
                }
                .boxed()
            }))
        };

        Some(Processor {
            condition,
            transform,
            process,
        })
    }

    pub fn condition(&self) -> Option<&Predicate> {
        self.condition.as_ref()
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn process_fn(&self) -> &ProcessFn {
        &self.process
    }

    pub fn capability(&self) -> ExecutionCapability {
        if self.process.is_sync() {
            ExecutionCapability::SyncOnly
        } else {
            ExecutionCapability::AsyncRequired
        }
    }

    pub fn is_sync(&self) -> bool {
        self.process.is_sync()
    }

    /// Evaluate through either arm; `None` is the void result.
    pub async fn process(&self, obj: Object) -> Option<Object> {
        self.process.run(obj).await
    }

    /// Same processor with its evaluation replaced (used by hooks).
    pub(crate) fn with_process(self, process: ProcessFn) -> Self {
        Processor { process, ..self }
    }
}

impl fmt::Debug for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor")
            .field("condition", &self.condition)
            .field("transform", &self.transform)
            .field("sync", &self.process.is_sync())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn equals(text: &'static str) -> Predicate {
        Predicate::from_fn(move |o| o.as_text() == Some(text))
    }

    fn async_equals(text: &'static str) -> Predicate {
        equals(text).into_async()
    }

    fn replace_with(text: &'static str) -> Transform {
        Transform::from_fn(move |_| Object::from(text))
    }

    fn wrap(tag: &'static str) -> Transform {
        Transform::from_fn(move |o| Object::from(format!("{}({})", tag, o.as_text().unwrap_or(""))))
    }

    async fn run(p: &Processor, input: &str) -> Option<String> {
        p.process(Object::from(input))
            .await
            .and_then(|o| o.as_text().map(str::to_string))
    }

    #[tokio::test]
    async fn test_leaf_state_machine() {
        let cond_only = Processor::leaf(Some(equals("a")), None).unwrap();
        assert_eq!(run(&cond_only, "a").await.as_deref(), Some("a"));
        assert_eq!(run(&cond_only, "b").await, None);

        let transform_only = Processor::leaf(None, Some(wrap("t"))).unwrap();
        assert_eq!(run(&transform_only, "b").await.as_deref(), Some("t(b)"));

        let both = Processor::leaf(Some(equals("a")), Some(wrap("t"))).unwrap();
        assert_eq!(run(&both, "a").await.as_deref(), Some("t(a)"));
        assert_eq!(run(&both, "b").await, None);
    }

    #[tokio::test]
    async fn test_leaf_passes_the_same_object_through() {
        let p = Processor::leaf(Some(equals("a")), None).unwrap();
        let input = Object::from("a");
        let output = p.process(input.clone()).await.unwrap();
        assert!(output.ptr_eq(&input));
    }

    #[tokio::test]
    async fn test_leaf_every_combination_agrees() {
        let conditions = [None, Some(equals("a")), Some(async_equals("a"))];
        let transforms = [None, Some(wrap("t")), Some(wrap("t").into_async())];
        for condition in conditions.iter() {
            for transform in transforms.iter() {
                let Some(p) = Processor::leaf(condition.clone(), transform.clone()) else {
                    assert!(condition.is_none() && transform.is_none());
                    continue;
                };
                let expected_sync = condition.as_ref().map_or(true, Predicate::is_sync)
                    && transform.as_ref().map_or(true, Transform::is_sync);
                assert_eq!(p.is_sync(), expected_sync);
                for input in ["a", "b"] {
                    let passes = condition.is_none() || input == "a";
                    let expected = passes.then(|| match transform {
                        Some(_) => format!("t({})", input),
                        None => input.to_string(),
                    });
                    assert_eq!(run(&p, input).await, expected);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_switch_first_non_void_wins() {
        let consulted = Arc::new(AtomicUsize::new(0));
        let counter = consulted.clone();
        let p3 = Processor::leaf(
            None,
            Some(Transform::from_fn(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Object::from("S")
            })),
        )
        .unwrap();
        let p1 = Processor::leaf(Some(Predicate::constant(false)), None).unwrap();
        let p2 = Processor::leaf(None, Some(replace_with("R"))).unwrap();

        let seq = Processor::switch(None, None, vec![p1, p2, p3]).unwrap();
        assert!(seq.is_sync());
        assert_eq!(run(&seq, "x").await.as_deref(), Some("R"));
        assert_eq!(consulted.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_switch_condition_and_finally_transform() {
        let children = vec![
            Processor::leaf(Some(equals("a")), Some(replace_with("A"))).unwrap(),
            Processor::leaf(Some(async_equals("b")), Some(replace_with("B"))).unwrap(),
        ];
        let seq = Processor::switch(
            Some(Predicate::from_fn(|o| o.as_text() != Some("skip"))),
            Some(wrap("f")),
            children,
        )
        .unwrap();
        assert!(!seq.is_sync());
        assert_eq!(run(&seq, "a").await.as_deref(), Some("f(A)"));
        assert_eq!(run(&seq, "b").await.as_deref(), Some("f(B)"));
        assert_eq!(run(&seq, "c").await, None);
        assert_eq!(run(&seq, "skip").await, None);
    }

    #[tokio::test]
    async fn test_switch_without_children_is_leaf() {
        let seq = Processor::switch(None, Some(wrap("t")), vec![]).unwrap();
        assert_eq!(run(&seq, "x").await.as_deref(), Some("t(x)"));
        assert!(Processor::switch(None, None, vec![]).is_none());
    }
}
