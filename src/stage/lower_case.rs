use crate::stage::{Stage, StageError};
use std::borrow::Cow;

/// Full Unicode lowercasing (`str::to_lowercase`, final sigma included).
pub struct LowerCase;

#[inline(always)]
fn changes_when_lowercased(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(changes_when_lowercased))
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        if text.is_ascii() {
            return Ok(if text.bytes().any(|b| b.is_ascii_uppercase()) {
                Cow::Owned(text.to_ascii_lowercase())
            } else {
                Cow::Borrowed(text)
            });
        }
        if !self.needs_apply(text)? {
            return Ok(Cow::Borrowed(text));
        }
        Ok(Cow::Owned(text.to_lowercase()))
    }
}
