//! stage/collapse_whitespace.rs
//! Every run of Unicode whitespace becomes one ASCII space; leading and
//! trailing whitespace is trimmed.
//!
//! Zero-copy when the text is already collapsed, and a pure trim returns a
//! borrowed sub-slice.

use crate::stage::{Stage, StageError};
use std::borrow::Cow;

pub struct CollapseWhitespace;

/// True when `text` has leading/trailing whitespace, a whitespace run longer
/// than one, or any whitespace other than U+0020.
#[inline]
pub(crate) fn needs_collapse(text: &str) -> bool {
    let mut prev_ws = true;
    for c in text.chars() {
        if c.is_whitespace() {
            if prev_ws || c != ' ' {
                return true;
            }
            prev_ws = true;
        } else {
            prev_ws = false;
        }
    }
    prev_ws && !text.is_empty()
}

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(needs_collapse(text))
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        let trimmed = text.trim();
        if !needs_collapse(trimmed) {
            return Ok(Cow::Borrowed(trimmed));
        }
        let mut out = String::with_capacity(trimmed.len());
        for word in trimmed.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
        Ok(Cow::Owned(out))
    }
}
