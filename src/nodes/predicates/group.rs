// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::consts::{ANY_KEY, AT_LEAST_KEY, AT_MOST_KEY, SINGLE_KEY, TYPE_ALL, TYPE_ANY};
use crate::config::{ConfigPath, ConfigSection};
use crate::engine::builder::{is_shortcut, COMBINATOR_KEYS};
use crate::engine::hook;
use crate::engine::{BuildContext, Services};
use crate::errors::{BuildError, ConfigWarning};
use crate::executable::group::group;
use crate::executable::{ExecutionCapability, GroupPolicy, Predicate};
use crate::nodes::predicates::ConstantPredicate;
use crate::observability::messages::build::GroupFolded;
use crate::observability::messages::StructuredLog;
use crate::traits::{HookContext, PredicateNode};

/// Ordered children combined under an `atLeast`/`atMost` policy.
///
/// Built from configuration, a group never has zero children (it folds to the
/// canonical constant) and never a single child it would trivially accept
/// (it folds to that child).
#[derive(Debug)]
pub struct GroupPredicate {
    path: ConfigPath,
    items: Vec<Arc<dyn PredicateNode>>,
    at_least: usize,
    at_most: usize,
    capability: ExecutionCapability,
}

impl GroupPredicate {
    pub fn new(path: ConfigPath, items: Vec<Arc<dyn PredicateNode>>, at_least: usize, at_most: usize) -> Self {
        let capability = items.iter().map(|item| item.capability()).collect();
        Self {
            path,
            items,
            at_least,
            at_most,
            capability,
        }
    }

    /// Build a group from its section.
    ///
    /// `All` ignores the combinator keys, `Any` only honors `AtMost`, and the
    /// generic group reads `Single`, `Any`, `AtLeast` and `AtMost`.
    pub fn from_config(
        type_name: &str,
        section: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Arc<dyn PredicateNode>, BuildError> {
        let counts = if is_shortcut(type_name, TYPE_ALL) {
            ctx.warn_ignored_keys(section, type_name, &COMBINATOR_KEYS);
            Ok((0, 0, false))
        } else if is_shortcut(type_name, TYPE_ANY) {
            ctx.warn_ignored_keys(section, type_name, &[ANY_KEY, AT_LEAST_KEY, SINGLE_KEY]);
            read_count(section, AT_MOST_KEY).map(|at_most| (1, at_most, false))
        } else {
            read_counts(section, ctx)
        };

        let items_key = ctx.options().predicate_items_key.clone();
        let items = ctx.build_items(section, &items_key, BuildContext::build_predicate);

        let (at_least, at_most, at_least_configured) = counts?;
        let mut items = items?;
        let path = section.path();

        if at_most != 0 && at_most < at_least {
            return Err(BuildError::AtMostBelowAtLeast {
                path: path.clone(),
                at_least,
                at_most,
            });
        }

        let count = items.len();
        let clamped = at_least_configured && count > 0 && at_least > 0 && at_least >= count;
        let (at_least, at_most) = if clamped {
            ctx.warn(ConfigWarning::AtLeastClamped {
                path: path.clone(),
                at_least,
                count,
            });
            (0, 0)
        } else {
            (at_least, at_most)
        };

        let policy = GroupPolicy::from_counts(at_least, at_most);
        if count == 0 {
            GroupFolded { path, item_count: 0 }.log();
            return Ok(ConstantPredicate::canonical(policy.neutral()));
        }
        if count == 1 && matches!(policy.normalize(1), GroupPolicy::All | GroupPolicy::Any) {
            if let Some(only) = items.pop() {
                GroupFolded { path, item_count: 1 }.log();
                return Ok(only);
            }
        }

        Ok(Arc::new(GroupPredicate::new(path.clone(), items, at_least, at_most)))
    }

    pub fn items(&self) -> &[Arc<dyn PredicateNode>] {
        &self.items
    }

    pub fn at_least(&self) -> usize {
        self.at_least
    }

    pub fn at_most(&self) -> usize {
        self.at_most
    }

    pub fn policy(&self) -> GroupPolicy {
        GroupPolicy::from_counts(self.at_least, self.at_most)
    }

    fn rebuilt(&self, items: Vec<Arc<dyn PredicateNode>>) -> Self {
        Self::new(self.path.clone(), items, self.at_least, self.at_most)
    }

    /// Void children are already filtered out of `items`.
    fn combine(&self, items: Vec<Predicate>) -> Option<Predicate> {
        if items.is_empty() {
            return None;
        }
        Some(group(items, self.policy()))
    }
}

impl PredicateNode for GroupPredicate {
    fn path(&self) -> &ConfigPath {
        &self.path
    }

    fn capability(&self) -> ExecutionCapability {
        self.capability
    }

    fn create_predicate(&self, services: &Services) -> Option<Predicate> {
        let items = self
            .items
            .iter()
            .filter_map(|item| item.create_predicate(services))
            .collect();
        self.combine(items)
    }

    fn children(&self) -> Vec<Arc<dyn PredicateNode>> {
        self.items.clone()
    }

    fn create_hook(&self, hooks: &Arc<dyn HookContext>, services: &Services) -> Option<Predicate> {
        let items = self
            .items
            .iter()
            .filter_map(|item| item.create_hook(hooks, services))
            .collect();
        self.combine(items)
            .map(|p| hook::wrap_predicate(self.path.clone(), p, hooks.clone()))
    }

    fn set_placeholder(
        &self,
        patch: &ConfigSection,
        ctx: &mut BuildContext,
    ) -> Result<Option<Arc<dyn PredicateNode>>, BuildError> {
        if !patch.path().is_descendant_of(&self.path) {
            return Ok(None);
        }
        for (index, item) in self.items.iter().enumerate() {
            if let Some(replaced) = item.set_placeholder(patch, ctx)? {
                let mut items = self.items.clone();
                items[index] = replaced;
                return Ok(Some(Arc::new(self.rebuilt(items))));
            }
        }
        Ok(None)
    }
}

/// `(atLeast, atMost, atLeast read from the AtLeast key)` of a generic group,
/// after the precedence rules.
fn read_counts(section: &ConfigSection, ctx: &mut BuildContext) -> Result<(usize, usize, bool), BuildError> {
    let single = section.get_bool(SINGLE_KEY)?.unwrap_or(false);
    let any = section.get_bool(ANY_KEY)?.unwrap_or(false);
    let at_least = read_count(section, AT_LEAST_KEY)?;
    let at_most = read_count(section, AT_MOST_KEY)?;

    if single {
        if section.contains_key(ANY_KEY)
            || section.contains_key(AT_LEAST_KEY)
            || section.contains_key(AT_MOST_KEY)
        {
            ctx.warn(ConfigWarning::SingleOverridesCounts {
                path: section.path().clone(),
            });
        }
        return Ok((1, 1, false));
    }
    if any {
        if section.contains_key(AT_LEAST_KEY) {
            ctx.warn(ConfigWarning::AnyOverridesAtLeast {
                path: section.path().clone(),
            });
        }
        return Ok((1, at_most, false));
    }
    Ok((at_least, at_most, section.contains_key(AT_LEAST_KEY)))
}

fn read_count(section: &ConfigSection, key: &'static str) -> Result<usize, BuildError> {
    match section.get_count(key)? {
        None => Ok(0),
        Some(value) if value < 0 => Err(BuildError::NegativeCount {
            path: section.path().clone(),
            key,
            value,
        }),
        Some(value) => Ok(value as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TypeRegistry;
    use crate::nodes::same_node;
    use crate::object::Object;

    fn context() -> BuildContext {
        BuildContext::new(Arc::new(TypeRegistry::with_builtins()))
    }

    fn build(ctx: &mut BuildContext, yaml: &str) -> Option<Arc<dyn PredicateNode>> {
        ctx.build_predicate(&ConfigSection::from_yaml_str("Root", yaml).unwrap())
    }

    async fn eval(node: &Arc<dyn PredicateNode>, input: &str) -> bool {
        node.create_predicate(&Services::new())
            .unwrap()
            .evaluate(&Object::from(input))
            .await
    }

    #[test]
    fn test_empty_groups_fold_to_canonical_constants() {
        let cases = vec![
            ("Type: All\nPredicates: []", true),
            ("Type: Any\nPredicates: []", false),
            ("Type: All", true),
            ("AtLeast: 3\nPredicates: []", false),
        ];
        for (yaml, expected) in cases {
            let mut ctx = context();
            let node = build(&mut ctx, yaml).unwrap();
            assert!(same_node(&node, &ConstantPredicate::canonical(expected)), "{}", yaml);
        }
    }

    #[test]
    fn test_single_item_group_is_the_item() {
        let mut ctx = context();
        let node = build(&mut ctx, "Type: Any\nPredicates:\n  - { Type: Contains, Text: a }\n").unwrap();
        assert_eq!(node.path().as_str(), "Root:Predicates:0");

        // Between 0 and 1 accepts everything, so the item is kept in a group.
        let node = build(&mut ctx, "AtMost: 1\nPredicates:\n  - { Type: Contains, Text: a }\n").unwrap();
        assert_eq!(node.path().as_str(), "Root");
    }

    #[test]
    fn test_at_least_one_over_one_item_is_clamped() {
        let one = "Predicates:\n  - { Type: Contains, Text: a }\n";
        let cases = vec![
            ("AtLeast: 1\n", 1),
            ("AtLeast: 1\nAtMost: 1\n", 1),
            ("Type: Any\n", 0),
            ("Single: true\n", 0),
            ("Any: true\n", 0),
        ];
        for (counts, warnings) in cases {
            let mut ctx = context();
            let yaml = format!("{}{}", counts, one);
            let node = build(&mut ctx, &yaml).unwrap();
            assert_eq!(node.path().as_str(), "Root:Predicates:0", "{}", counts);

            let clamped: Vec<_> = ctx.diagnostics().warnings().collect();
            assert_eq!(clamped.len(), warnings, "{}", counts);
            if warnings == 1 {
                assert!(clamped[0].message.contains("AtLeast (1)"), "{}", clamped[0]);
            }
        }
    }

    #[tokio::test]
    async fn test_at_least_scenario() {
        let mut ctx = context();
        let node = build(
            &mut ctx,
            "AtLeast: 2\nPredicates:\n  - { Type: Contains, Text: x }\n  - { Type: Contains, Text: y }\n  - { Type: Contains, Text: z }\n",
        )
        .unwrap();

        for (input, expected) in [("xy", true), ("x", false), ("xyz", true), ("", false)] {
            assert_eq!(eval(&node, input).await, expected, "input {:?}", input);
        }
    }

    #[tokio::test]
    async fn test_count_rules() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            warnings: usize,
            inputs: Vec<(&'static str, bool)>,
        }

        let items = "Predicates:\n  - { Type: Contains, Text: a }\n  - { Type: Contains, Text: b }\n  - { Type: Contains, Text: c }\n";
        let cases = vec![
            TestCase {
                name: "AtLeast equal to count is All",
                yaml: "AtLeast: 3\n",
                warnings: 1,
                inputs: vec![("abc", true), ("ab", false)],
            },
            TestCase {
                name: "Any wins over AtLeast",
                yaml: "Any: true\nAtLeast: 2\n",
                warnings: 1,
                inputs: vec![("a", true), ("z", false)],
            },
            TestCase {
                name: "Single is exactly one",
                yaml: "Single: true\n",
                warnings: 0,
                inputs: vec![("a", true), ("ab", false), ("z", false)],
            },
            TestCase {
                name: "Single wins over counts",
                yaml: "Single: true\nAtLeast: 2\n",
                warnings: 1,
                inputs: vec![("b", true), ("bc", false)],
            },
            TestCase {
                name: "Between one and two",
                yaml: "AtLeast: 1\nAtMost: 2\n",
                warnings: 0,
                inputs: vec![("a", true), ("ab", true), ("abc", false), ("", false)],
            },
            TestCase {
                name: "Any type honors AtMost",
                yaml: "Type: Any\nAtMost: 1\n",
                warnings: 0,
                inputs: vec![("c", true), ("ac", false)],
            },
            TestCase {
                name: "All type ignores counts",
                yaml: "Type: All\nAtLeast: 1\n",
                warnings: 1,
                inputs: vec![("abc", true), ("a", false)],
            },
        ];

        for case in cases {
            let mut ctx = context();
            let yaml = format!("{}{}", case.yaml, items);
            let node = build(&mut ctx, &yaml).unwrap_or_else(|| panic!("case: {}", case.name));
            assert_eq!(ctx.diagnostics().warnings().count(), case.warnings, "case: {}", case.name);
            for (input, expected) in case.inputs {
                assert_eq!(eval(&node, input).await, expected, "case: {} input {:?}", case.name, input);
            }
        }
    }

    #[test]
    fn test_invalid_counts_are_errors() {
        let cases = vec![
            "AtLeast: -1\nPredicates: [true, false]\n",
            "AtMost: -2\nPredicates: [true, false]\n",
            "AtLeast: 2\nAtMost: 1\nPredicates: [true, false, true]\n",
            "AtLeast: many\nPredicates: [true, false]\n",
        ];
        for yaml in cases {
            let mut ctx = context();
            assert!(build(&mut ctx, yaml).is_none(), "{}", yaml);
            assert_eq!(ctx.diagnostics().error_count(), 1, "{}", yaml);
        }
    }

    #[tokio::test]
    async fn test_void_items_are_skipped() {
        let mut ctx = context();
        let node = build(
            &mut ctx,
            "AtLeast: 2\nPredicates:\n  - Placeholder\n  - { Type: Contains, Text: a }\n  - { Type: Contains, Text: b }\n",
        )
        .unwrap();
        assert!(node.capability().is_sync());
        // Two effective items remain, so AtLeast 2 is All over them.
        assert!(eval(&node, "ab").await);
        assert!(!eval(&node, "a").await);

        let node = build(&mut ctx, "Predicates: [Placeholder, Placeholder]\n").unwrap();
        assert!(node.capability().is_void());
        assert!(node.create_predicate(&Services::new()).is_none());
    }
}
