// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Minimal execution model a node (or executable) needs.
///
/// Classification is bottom-up: a composite is [`ExecutionCapability::SyncOnly`]
/// only when every present part is, and [`ExecutionCapability::Void`] when no
/// part is present at all.
///
/// # Examples
///
/// ```
/// use the_sifter::ExecutionCapability::*;
///
/// assert_eq!(Void.combine(SyncOnly), SyncOnly);
/// assert_eq!(SyncOnly.combine(AsyncRequired), AsyncRequired);
/// assert_eq!([Void, Void].into_iter().collect::<the_sifter::ExecutionCapability>(), Void);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionCapability {
    #[default]
    Void,
    SyncOnly,
    AsyncRequired,
}

impl ExecutionCapability {
    /// Combine two parts of the same node.
    pub fn combine(self, other: ExecutionCapability) -> ExecutionCapability {
        use ExecutionCapability::*;
        match (self, other) {
            (AsyncRequired, _) | (_, AsyncRequired) => AsyncRequired,
            (SyncOnly, _) | (_, SyncOnly) => SyncOnly,
            (Void, Void) => Void,
        }
    }

    pub fn is_void(self) -> bool {
        self == ExecutionCapability::Void
    }

    pub fn is_sync(self) -> bool {
        self == ExecutionCapability::SyncOnly
    }
}

impl FromIterator<ExecutionCapability> for ExecutionCapability {
    fn from_iter<I: IntoIterator<Item = ExecutionCapability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ExecutionCapability::Void, ExecutionCapability::combine)
    }
}

impl fmt::Display for ExecutionCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionCapability::Void => "void",
            ExecutionCapability::SyncOnly => "sync",
            ExecutionCapability::AsyncRequired => "async",
        };
        f.write_str(name)
    }
}
