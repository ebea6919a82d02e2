// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::executable::Transform;
use crate::object::Object;

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverse Text transform - reverses the characters of text objects
pub fn reverse_text() -> Transform {
    Transform::from_fn(|obj| match obj.as_text() {
        Some(text) => Object::from(reverse(text)),
        None => obj.clone(),
    })
}

/// Same mapping as [`reverse_text`], suspending once before answering.
pub fn async_reverse_text() -> Transform {
    Transform::from_async(|obj: Object| async move {
        tokio::task::yield_now().await;
        match obj.as_text() {
            Some(text) => Object::from(reverse(text)),
            None => obj.clone(),
        }
    })
}
