// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The group combinator: All / Any / At-least-k / Between-k-and-m.
//!
//! Children are always evaluated strictly in order, one at a time. The same
//! [`Tally`] drives the synchronous and asynchronous loops so both execution
//! modes short-circuit at exactly the same child.

use futures::future::FutureExt;
use std::fmt;
use std::sync::Arc;

use crate::executable::predicate::{Predicate, SyncPredicateFn};
use crate::object::Object;

/// Match policy of a group, derived from its `atLeast`/`atMost` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPolicy {
    /// AND: fails on the first failing child.
    All,
    /// OR: succeeds on the first passing child.
    Any,
    /// Succeeds as soon as `k` children passed.
    AtLeast(usize),
    /// Evaluates every child; fails as soon as more than `at_most` passed.
    Between { at_least: usize, at_most: usize },
}

impl GroupPolicy {
    /// Map a validated `(atLeast, atMost)` pair to a policy. `0` means unbounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use the_sifter::executable::GroupPolicy;
    ///
    /// assert_eq!(GroupPolicy::from_counts(0, 0), GroupPolicy::All);
    /// assert_eq!(GroupPolicy::from_counts(1, 0), GroupPolicy::Any);
    /// assert_eq!(GroupPolicy::from_counts(2, 0), GroupPolicy::AtLeast(2));
    /// assert_eq!(
    ///     GroupPolicy::from_counts(1, 1),
    ///     GroupPolicy::Between { at_least: 1, at_most: 1 }
    /// );
    /// ```
    pub fn from_counts(at_least: usize, at_most: usize) -> Self {
        match (at_least, at_most) {
            (0, 0) => GroupPolicy::All,
            (1, 0) => GroupPolicy::Any,
            (k, 0) => GroupPolicy::AtLeast(k),
            (k, m) => GroupPolicy::Between {
                at_least: k,
                at_most: m,
            },
        }
    }

    /// Result of the group when it has no children.
    pub fn neutral(self) -> bool {
        match self {
            GroupPolicy::All => true,
            GroupPolicy::Any | GroupPolicy::AtLeast(_) => false,
            GroupPolicy::Between { at_least, .. } => at_least == 0,
        }
    }

    /// Simplify the policy for a concrete child count.
    ///
    /// Requiring at least as many passes as there are children is All; an
    /// upper bound no count can exceed is dropped so the group may
    /// short-circuit again.
    pub fn normalize(self, count: usize) -> Self {
        match self {
            GroupPolicy::AtLeast(k) if k >= count => GroupPolicy::All,
            GroupPolicy::Between { at_least, .. } if at_least >= count => GroupPolicy::All,
            GroupPolicy::Between { at_least, at_most } if at_least > 0 && at_most >= count => {
                GroupPolicy::from_counts(at_least, 0)
            }
            other => other,
        }
    }
}

impl fmt::Display for GroupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupPolicy::All => write!(f, "all"),
            GroupPolicy::Any => write!(f, "any"),
            GroupPolicy::AtLeast(k) => write!(f, "at least {}", k),
            GroupPolicy::Between { at_least, at_most } => {
                write!(f, "between {} and {}", at_least, at_most)
            }
        }
    }
}

enum Step {
    Continue,
    Done(bool),
}

/// Running pass count for one group evaluation.
struct Tally {
    policy: GroupPolicy,
    passed: usize,
}

impl Tally {
    fn new(policy: GroupPolicy) -> Self {
        Self { policy, passed: 0 }
    }

    fn record(&mut self, passed: bool) -> Step {
        if passed {
            self.passed += 1;
        }
        match self.policy {
            GroupPolicy::All if !passed => Step::Done(false),
            GroupPolicy::Any if passed => Step::Done(true),
            GroupPolicy::AtLeast(k) if self.passed >= k => Step::Done(true),
            GroupPolicy::Between { at_most, .. } if self.passed > at_most => Step::Done(false),
            _ => Step::Continue,
        }
    }

    fn finish(self) -> bool {
        match self.policy {
            GroupPolicy::All => true,
            GroupPolicy::Any | GroupPolicy::AtLeast(_) => false,
            GroupPolicy::Between { at_least, .. } => self.passed >= at_least,
        }
    }
}

fn evaluate_sync(items: &[SyncPredicateFn], policy: GroupPolicy, obj: &Object) -> bool {
    let mut tally = Tally::new(policy);
    for item in items {
        if let Step::Done(result) = tally.record(item(obj)) {
            return result;
        }
    }
    tally.finish()
}

async fn evaluate_async(items: &[Predicate], policy: GroupPolicy, obj: &Object) -> bool {
    let mut tally = Tally::new(policy);
    for item in items {
        if let Step::Done(result) = tally.record(item.evaluate(obj).await) {
            return result;
        }
    }
    tally.finish()
}

/// Combine children under `policy`.
///
/// Zero children collapse to the neutral constant and a lone child under a
/// policy it trivially satisfies is returned as is. The result is synchronous
/// iff every child is.
pub fn group(mut items: Vec<Predicate>, policy: GroupPolicy) -> Predicate {
    if items.is_empty() {
        return Predicate::constant(policy.neutral());
    }
    let policy = policy.normalize(items.len());
    if items.len() == 1 && matches!(policy, GroupPolicy::All | GroupPolicy::Any) {
        if let Some(only) = items.pop() {
            return only;
        }
    }

    if items.iter().all(Predicate::is_sync) {
        let tests: Arc<[SyncPredicateFn]> = items
            .into_iter()
            .filter_map(|item| item.as_sync().cloned())
            .collect();
        return Predicate::Sync(Arc::new(move |obj| evaluate_sync(&tests, policy, obj)));
    }

    let items: Arc<[Predicate]> = items.into();
    Predicate::Async(Arc::new(move |obj| {
        let items = items.clone();
        async move { evaluate_async(&items, policy, &obj).await }.boxed()
    }))
}

pub fn all(items: Vec<Predicate>) -> Predicate {
    group(items, GroupPolicy::All)
}

pub fn any(items: Vec<Predicate>) -> Predicate {
    group(items, GroupPolicy::Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn contains(needle: &'static str) -> Predicate {
        Predicate::from_fn(move |o| o.as_text().map_or(false, |t| t.contains(needle)))
    }

    /// Records its label every time it is evaluated.
    fn traced(label: &'static str, result: bool, trace: Arc<Mutex<Vec<&'static str>>>) -> Predicate {
        Predicate::from_fn(move |_| {
            trace.lock().unwrap().push(label);
            result
        })
    }

    fn traced_async(
        label: &'static str,
        result: bool,
        trace: Arc<Mutex<Vec<&'static str>>>,
    ) -> Predicate {
        Predicate::from_async(move |_| {
            let trace = trace.clone();
            async move {
                tokio::task::yield_now().await;
                trace.lock().unwrap().push(label);
                result
            }
        })
    }

    #[tokio::test]
    async fn test_at_least_two_of_three() {
        let p = group(
            vec![contains("x"), contains("y"), contains("z")],
            GroupPolicy::AtLeast(2),
        );
        assert!(p.is_sync());
        assert!(p.evaluate(&Object::from("xy")).await);
        assert!(!p.evaluate(&Object::from("x")).await);
        assert!(p.evaluate(&Object::from("xyz")).await);
    }

    #[tokio::test]
    async fn test_between_fails_on_excess() {
        let p = group(
            vec![contains("x"), contains("y"), contains("z")],
            GroupPolicy::Between {
                at_least: 1,
                at_most: 1,
            },
        );
        assert!(p.evaluate(&Object::from("x")).await);
        assert!(!p.evaluate(&Object::from("xy")).await);
        assert!(!p.evaluate(&Object::from("abc")).await);
    }

    #[tokio::test]
    async fn test_short_circuit_order_is_identical_in_both_modes() {
        struct Case {
            name: &'static str,
            policy: GroupPolicy,
            results: [bool; 3],
            expected: bool,
            evaluated: Vec<&'static str>,
        }

        let cases = vec![
            Case {
                name: "all stops at first failure",
                policy: GroupPolicy::All,
                results: [true, false, true],
                expected: false,
                evaluated: vec!["a", "b"],
            },
            Case {
                name: "any stops at first success",
                policy: GroupPolicy::Any,
                results: [false, true, true],
                expected: true,
                evaluated: vec!["a", "b"],
            },
            Case {
                name: "at least two stops once reached",
                policy: GroupPolicy::AtLeast(2),
                results: [true, true, false],
                expected: true,
                evaluated: vec!["a", "b"],
            },
            Case {
                name: "between stops once exceeded",
                policy: GroupPolicy::Between {
                    at_least: 1,
                    at_most: 1,
                },
                results: [true, true, false],
                expected: false,
                evaluated: vec!["a", "b"],
            },
            Case {
                name: "between evaluates everything when within bounds",
                policy: GroupPolicy::Between {
                    at_least: 1,
                    at_most: 2,
                },
                results: [true, false, true],
                expected: true,
                evaluated: vec!["a", "b", "c"],
            },
        ];

        for case in cases {
            for asynchronous in [false, true] {
                let trace = Arc::new(Mutex::new(Vec::new()));
                let build = if asynchronous { traced_async } else { traced };
                let items = vec![
                    build("a", case.results[0], trace.clone()),
                    build("b", case.results[1], trace.clone()),
                    build("c", case.results[2], trace.clone()),
                ];
                let p = group(items, case.policy);
                assert_eq!(p.is_sync(), !asynchronous, "{}", case.name);
                assert_eq!(
                    p.evaluate(&Object::from("")).await,
                    case.expected,
                    "{} (async: {})",
                    case.name,
                    asynchronous
                );
                assert_eq!(
                    *trace.lock().unwrap(),
                    case.evaluated,
                    "{} (async: {})",
                    case.name,
                    asynchronous
                );
            }
        }
    }

    #[tokio::test]
    async fn test_empty_and_single_fold() {
        assert!(all(vec![]).evaluate(&Object::from("")).await);
        assert!(!any(vec![]).evaluate(&Object::from("")).await);

        let only = contains("x");
        let folded = any(vec![only.clone()]);
        match (&only, &folded) {
            (Predicate::Sync(a), Predicate::Sync(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected the lone child back"),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(GroupPolicy::AtLeast(3).normalize(3), GroupPolicy::All);
        assert_eq!(GroupPolicy::AtLeast(2).normalize(3), GroupPolicy::AtLeast(2));
        assert_eq!(
            GroupPolicy::Between { at_least: 1, at_most: 5 }.normalize(3),
            GroupPolicy::Any
        );
        assert_eq!(
            GroupPolicy::Between { at_least: 3, at_most: 4 }.normalize(3),
            GroupPolicy::All
        );
    }

    #[tokio::test]
    async fn test_mixed_group_runs_sync_children_inline() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let p = all(vec![
            traced("sync", true, trace.clone()),
            traced_async("async", true, trace.clone()),
        ]);
        assert!(!p.is_sync());
        assert!(p.evaluate(&Object::from("")).await);
        assert_eq!(*trace.lock().unwrap(), vec!["sync", "async"]);
    }
}
