//! stage/remove_non_printable.rs
//! Replace C0 (U+0000–U+001F) and DEL/C1 (U+007F–U+009F) controls with a
//! space. Tabs and newlines are controls too, so they become spaces here.

use crate::stage::{Stage, StageError};
use std::borrow::Cow;

#[inline(always)]
pub(crate) const fn is_non_printable(c: char) -> bool {
    matches!(c as u32, 0x00..=0x1F | 0x7F..=0x9F)
}

pub struct RemoveNonPrintable;

impl Stage for RemoveNonPrintable {
    fn name(&self) -> &'static str {
        "remove_non_printable"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(is_non_printable))
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(text)? {
            return Ok(Cow::Borrowed(text));
        }
        Ok(Cow::Owned(
            text.chars()
                .map(|c| if is_non_printable(c) { ' ' } else { c })
                .collect(),
        ))
    }
}
