// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Hook composition.
//!
//! Wrapping keeps the executable's tag: a synchronous predicate stays a plain
//! function after it is hooked. The wrapper fires `before` once, evaluates,
//! fires `after` once with the result, and returns that result untouched.
//!
//! Groups are hooked by hooking each child and then wrapping the aggregate, so
//! observers see `group.before`, the children in evaluation order, then
//! `group.after`.
//!
//! Every hooked evaluation runs inside an `evaluation` span, so events raised
//! by nested nodes are attributed to their enclosing node.

use futures::future::FutureExt;
use std::sync::Arc;
use tracing::{Instrument, Span};

use crate::config::ConfigPath;
use crate::executable::{ProcessFn, Predicate, Processor, Transform};
use crate::observability::messages::evaluation::EvaluationStarted;
use crate::observability::messages::StructuredLog;
use crate::traits::{HookContext, NodeFamily};

fn evaluation_span(family: NodeFamily, path: &ConfigPath) -> Span {
    EvaluationStarted { family, path }.span("hooked_evaluation")
}

pub fn wrap_predicate(path: ConfigPath, predicate: Predicate, hooks: Arc<dyn HookContext>) -> Predicate {
    match predicate {
        Predicate::Sync(test) => Predicate::Sync(Arc::new(move |obj| {
            let _guard = evaluation_span(NodeFamily::Predicate, &path).entered();
            hooks.on_before_predicate(&path, obj);
            let result = test(obj);
            hooks.on_after_predicate(&path, obj, result);
            result
        })),
        Predicate::Async(test) => Predicate::Async(Arc::new(move |obj| {
            let (path, hooks, test) = (path.clone(), hooks.clone(), test.clone());
            let span = evaluation_span(NodeFamily::Predicate, &path);
            async move {
                hooks.on_before_predicate(&path, &obj);
                let result = test(obj.clone()).await;
                hooks.on_after_predicate(&path, &obj, result);
                result
            }
            .instrument(span)
            .boxed()
        })),
    }
}

pub fn wrap_transform(path: ConfigPath, transform: Transform, hooks: Arc<dyn HookContext>) -> Transform {
    match transform {
        Transform::Sync(map) => Transform::Sync(Arc::new(move |obj| {
            let _guard = evaluation_span(NodeFamily::Transform, &path).entered();
            hooks.on_before_transform(&path, obj);
            let output = map(obj);
            hooks.on_after_transform(&path, obj, &output);
            output
        })),
        Transform::Async(map) => Transform::Async(Arc::new(move |obj| {
            let (path, hooks, map) = (path.clone(), hooks.clone(), map.clone());
            let span = evaluation_span(NodeFamily::Transform, &path);
            async move {
                hooks.on_before_transform(&path, &obj);
                let output = map(obj.clone()).await;
                hooks.on_after_transform(&path, &obj, &output);
                output
            }
            .instrument(span)
            .boxed()
        })),
    }
}

pub fn wrap_processor(path: ConfigPath, processor: Processor, hooks: Arc<dyn HookContext>) -> Processor {
    let process = match processor.process_fn().clone() {
        ProcessFn::Sync(process) => ProcessFn::Sync(Arc::new(move |obj| {
            let _guard = evaluation_span(NodeFamily::Processor, &path).entered();
            hooks.on_before_process(&path, obj);
            let output = process(obj);
            hooks.on_after_process(&path, obj, output.as_ref());
            output
        })),
        ProcessFn::Async(process) => ProcessFn::Async(Arc::new(move |obj| {
            let (path, hooks, process) = (path.clone(), hooks.clone(), process.clone());
            let span = evaluation_span(NodeFamily::Processor, &path);
            async move {
                hooks.on_before_process(&path, &obj);
                let output = process(obj.clone()).await;
                hooks.on_after_process(&path, &obj, output.as_ref());
                output
            }
            .instrument(span)
            .boxed()
        })),
    };
    processor.with_process(process)
}

/// AND of two hooked operands that evaluates both sides.
///
/// Plain conjunction would skip `right` once `left` fails; under hooks both
/// operands run so observers always see both of them. The result is the same.
pub fn hooked_and(left: Predicate, right: Predicate) -> Predicate {
    pair(left, right, |l, r| l && r)
}

/// OR counterpart of [`hooked_and`].
pub fn hooked_or(left: Predicate, right: Predicate) -> Predicate {
    pair(left, right, |l, r| l || r)
}

fn pair(left: Predicate, right: Predicate, combine: fn(bool, bool) -> bool) -> Predicate {
    match (left, right) {
        (Predicate::Sync(left), Predicate::Sync(right)) => Predicate::Sync(Arc::new(move |obj| {
            let l = left(obj);
            let r = right(obj);
            combine(l, r)
        })),
        (left, right) => Predicate::Async(Arc::new(move |obj| {
            let (left, right) = (left.clone(), right.clone());
            async move {
                let l = left.evaluate(&obj).await;
                let r = right.evaluate(&obj).await;
                combine(l, r)
            }
            .boxed()
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;
    use std::sync::Mutex;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl HookContext for Recorder {
        fn on_before_predicate(&self, path: &ConfigPath, _input: &Object) {
            self.events.lock().unwrap().push(format!("before {}", path));
        }

        fn on_after_predicate(&self, path: &ConfigPath, _input: &Object, result: bool) {
            self.events.lock().unwrap().push(format!("after {} {}", path, result));
        }

        fn on_after_transform(&self, path: &ConfigPath, _input: &Object, output: &Object) {
            self.events
                .lock()
                .unwrap()
                .push(format!("transform {} {}", path, output.as_text().unwrap_or("")));
        }

        fn on_after_process(&self, path: &ConfigPath, _input: &Object, output: Option<&Object>) {
            self.events
                .lock()
                .unwrap()
                .push(format!("process {} {}", path, output.is_some()));
        }
    }

    #[tokio::test]
    async fn test_wrap_keeps_tag_and_result() {
        let recorder = Arc::new(Recorder::default());
        let hooks: Arc<dyn HookContext> = recorder.clone();

        let sync = wrap_predicate(ConfigPath::new("P"), Predicate::constant(true), hooks.clone());
        assert!(sync.is_sync());
        assert!(sync.evaluate(&Object::from("x")).await);
        assert_eq!(recorder.take(), vec!["before P", "after P true"]);

        let asynchronous = wrap_predicate(
            ConfigPath::new("Q"),
            Predicate::constant(false).into_async(),
            hooks,
        );
        assert!(!asynchronous.is_sync());
        assert!(!asynchronous.evaluate(&Object::from("x")).await);
        assert_eq!(recorder.take(), vec!["before Q", "after Q false"]);
    }

    #[tokio::test]
    async fn test_hooked_pair_evaluates_both_sides() {
        let recorder = Arc::new(Recorder::default());
        let hooks: Arc<dyn HookContext> = recorder.clone();
        let left = wrap_predicate(ConfigPath::new("L"), Predicate::constant(false), hooks.clone());
        let right = wrap_predicate(ConfigPath::new("R"), Predicate::constant(true), hooks.clone());

        let both = hooked_and(left.clone(), right.clone());
        assert!(both.is_sync());
        assert!(!both.evaluate(&Object::from("")).await);
        assert_eq!(
            recorder.take(),
            vec!["before L", "after L false", "before R", "after R true"]
        );

        let either = hooked_or(right.into_async(), left);
        assert!(either.evaluate(&Object::from("")).await);
        assert_eq!(recorder.take().len(), 4);
    }

    #[tokio::test]
    async fn test_wrap_transform_and_processor() {
        let recorder = Arc::new(Recorder::default());
        let hooks: Arc<dyn HookContext> = recorder.clone();
        let upper = Transform::from_fn(|o| Object::from(o.as_text().unwrap_or("").to_uppercase()));
        let hooked = wrap_transform(ConfigPath::new("T"), upper, hooks.clone());
        assert_eq!(hooked.apply(Object::from("ab")).await.as_text(), Some("AB"));
        assert_eq!(recorder.take(), vec!["transform T AB"]);

        let processor = Processor::leaf(Some(Predicate::constant(false)), None).unwrap();
        let hooked = wrap_processor(ConfigPath::new("P"), processor, hooks);
        assert!(hooked.process(Object::from("x")).await.is_none());
        assert_eq!(recorder.take(), vec!["process P false"]);
    }

    /// Layer recording every new span with its `path` field, and span entries.
    #[derive(Clone, Default)]
    struct SpanRecorder {
        created: Arc<Mutex<Vec<String>>>,
        entered: Arc<Mutex<Vec<String>>>,
    }

    struct PathField(String);

    impl Visit for PathField {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "path" {
                self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S> Layer<S> for SpanRecorder
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let mut path = PathField(String::new());
            attrs.record(&mut path);
            self.created
                .lock()
                .unwrap()
                .push(format!("{} {}", attrs.metadata().name(), path.0));
        }

        fn on_enter(&self, id: &Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(id) {
                self.entered.lock().unwrap().push(span.name().to_string());
            }
        }
    }

    #[test]
    fn test_hooked_evaluation_runs_inside_a_span() {
        let spans = SpanRecorder::default();
        let subscriber = tracing_subscriber::registry().with(spans.clone());
        let hooks: Arc<dyn HookContext> = Arc::new(Recorder::default());

        tracing::subscriber::with_default(subscriber, || {
            let sync = wrap_predicate(ConfigPath::new("Root:Sync"), Predicate::constant(true), hooks.clone());
            let asynchronous = wrap_transform(
                ConfigPath::new("Root:Async"),
                Transform::from_fn(|o| o.clone()).into_async(),
                hooks.clone(),
            );

            futures::executor::block_on(async {
                assert!(sync.evaluate(&Object::from("x")).await);
                assert_eq!(asynchronous.apply(Object::from("y")).await.as_text(), Some("y"));
            });
        });

        assert_eq!(
            *spans.created.lock().unwrap(),
            vec!["evaluation Root:Sync", "evaluation Root:Async"]
        );
        let entered = spans.entered.lock().unwrap();
        assert!(entered.len() >= 2);
        assert!(entered.iter().all(|name| name == "evaluation"));
    }
}
