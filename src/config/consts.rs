// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Separator between configuration path segments
pub const PATH_SEPARATOR: char = ':';

/// Node kind, resolved by the factory (or one of the shortcut names below)
pub const TYPE_KEY: &str = "Type";
pub const CONDITION_KEY: &str = "Condition";
pub const TRANSFORM_KEY: &str = "Transform";
/// Operand of a `Not` predicate
pub const OPERAND_KEY: &str = "Operand";

/// Group combinator keys
pub const ANY_KEY: &str = "Any";
pub const AT_LEAST_KEY: &str = "AtLeast";
pub const AT_MOST_KEY: &str = "AtMost";
pub const SINGLE_KEY: &str = "Single";

/// Default item-list keys per family
pub const DEFAULT_PREDICATE_ITEMS_KEY: &str = "Predicates";
pub const DEFAULT_TRANSFORM_ITEMS_KEY: &str = "Transforms";
pub const DEFAULT_PROCESSOR_ITEMS_KEY: &str = "Processors";

/// Shortcut type names handled by the builder itself
pub const TYPE_TRUE: &str = "true";
pub const TYPE_FALSE: &str = "false";
pub const TYPE_ALL: &str = "All";
pub const TYPE_ANY: &str = "Any";
pub const TYPE_GROUP: &str = "Group";
pub const TYPE_NOT: &str = "Not";
pub const TYPE_PLACEHOLDER: &str = "Placeholder";
pub const TYPE_SEQUENCE: &str = "Sequence";
pub const TYPE_PROCESSOR: &str = "Processor";

/// Path segment under which a processor's intrinsic condition/transform is hooked
pub const INTRINSIC_SEGMENT: &str = "Intrinsic";
