//! stage/remove_emails.rs
//! Replace email-like substrings with a single space.
//!
//! The pattern is deliberately conservative: a local part of word
//! characters, dots and hyphens, `@`, one host label, a dot, and one
//! top-level label. `a@mail.example.com` therefore loses `a@mail.example`
//! and keeps `.com`.

use crate::stage::{Stage, StageError, replace_with_space};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w.-]+?@\w+?\.\w+?\b").expect("email regex"));

pub struct RemoveEmails;

impl Stage for RemoveEmails {
    fn name(&self) -> &'static str {
        "remove_emails"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        if memchr::memchr(b'@', text.as_bytes()).is_none() {
            return Ok(false);
        }
        Ok(EMAIL_RE.is_match(text))
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        Ok(replace_with_space(&EMAIL_RE, text))
    }
}
