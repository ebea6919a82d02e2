// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod change_text_case;
pub mod prefix_suffix_adder;
pub mod reverse_text;

pub use change_text_case::{CaseMode, ChangeTextCase};
pub use prefix_suffix_adder::PrefixSuffixAdder;
pub use reverse_text::{async_reverse_text, reverse_text};
