//! stage/remove_punctuation.rs
//! Replace every character that is neither a word character (letter, mark,
//! digit, connector such as `_`) nor whitespace with a single space.
//! Opt-in: most NLP consumers want punctuation kept.

use crate::stage::{Stage, StageError, replace_with_space};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation regex"));

pub struct RemovePunctuation;

impl Stage for RemovePunctuation {
    fn name(&self) -> &'static str {
        "remove_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(PUNCT_RE.is_match(text))
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        Ok(replace_with_space(&PUNCT_RE, text))
    }
}
