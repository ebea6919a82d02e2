// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod constant;
mod group;
mod leaf;
mod not;
mod placeholder;

pub use constant::ConstantPredicate;
pub use group::GroupPredicate;
pub use leaf::LeafPredicate;
pub use not::NotPredicate;
pub use placeholder::PlaceholderPredicate;
