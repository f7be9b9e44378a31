use crate::{
    markup,
    stage::{Stage, StageError, collapse_whitespace::needs_collapse},
};
use memchr::memchr2;
use std::borrow::Cow;

/// Strips markup and decodes entities while preserving visible text.
///
/// - **Zero-copy** when no `<` or `&` appears and whitespace is already
///   collapsed
/// - **Never fails**: malformed markup falls back to regex tag removal
/// - Script and style content is dropped; see [`markup`] for the details
pub struct StripHtml;

impl Stage for StripHtml {
    fn name(&self) -> &'static str {
        "strip_html"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if text.is_empty() {
            return Ok(false);
        }
        Ok(memchr2(b'<', b'&', text.as_bytes()).is_some() || needs_collapse(text))
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        Ok(markup::strip(text))
    }
}
