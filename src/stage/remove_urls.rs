//! stage/remove_urls.rs
//! Replace `http://…`, `https://…` and `www.…` runs with a single space.
//! The match extends to the next whitespace, trailing punctuation included.

use crate::stage::{Stage, StageError, replace_with_space};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("url regex"));

/// `\S` here is Unicode-aware but does not count the information separators
/// U+001C–U+001F as whitespace, so a URL directly followed by one of them
/// also consumes the next word. Those separators are only turned into spaces
/// later by [`RemoveNonPrintable`](super::remove_non_printable::RemoveNonPrintable).
pub struct RemoveUrls;

impl Stage for RemoveUrls {
    fn name(&self) -> &'static str {
        "remove_urls"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(URL_RE.is_match(text))
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        Ok(replace_with_space(&URL_RE, text))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domains_are_kept() {
        assert!(!RemoveUrls.needs_apply("example.com is a domain").unwrap());
    }

    #[test]
    fn multiple_urls() {
        assert_eq!(
            RemoveUrls
                .apply("http://a.com and https://b.org/x")
                .unwrap(),
            "  and  "
        );
    }
}
