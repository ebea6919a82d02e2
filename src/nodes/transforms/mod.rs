// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod leaf;
mod placeholder;
mod sequence;

pub use leaf::LeafTransform;
pub use placeholder::PlaceholderTransform;
pub use sequence::TransformSequence;
