//! Core cleaning stage abstraction.
//!
//! A stage is one text-to-text transform in the cleaning pipeline. Stages are
//! stateless after construction and borrow their input, so a stage with
//! nothing to do hands back `Cow::Borrowed` and the pipeline never allocates
//! for it.
//!
//! * `needs_apply(&self, text)` is the cheap pre-check. Returning `Ok(false)`
//!   skips the stage entirely.
//! * `apply(&self, text)` performs the transform. A returned error is never
//!   fatal: [`DynamicProcess`](crate::process::DynamicProcess) logs it and
//!   keeps the text it had before the stage ran.
//!
//! Stages backed by an external collaborator (encoding repair,
//! transliteration, emoji handling) surface collaborator failures as
//! [`StageError::Collaborator`].

pub mod collapse_whitespace;
pub mod fix_text;
pub mod handle_emojis;
pub mod lower_case;
pub mod remove_emails;
pub mod remove_non_printable;
pub mod remove_punctuation;
pub mod remove_urls;
pub mod strip_html;
pub mod transliterate;

use crate::collaborator::CollaboratorError;
use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("cleaning failed at stage `{0}`: {1}")]
    Failed(&'static str, String),

    #[error("collaborator failed at stage `{stage}`: {source}")]
    Collaborator {
        stage: &'static str,
        #[source]
        source: CollaboratorError,
    },
}

/// A single cleaning step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Returns `Cow::Borrowed` when the text
    /// is already clean for this stage.
    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError>;
}

/// Replace every match of `re` with a single space.
///
/// `Regex::replace_all` already returns `Cow::Borrowed` when nothing matched,
/// which keeps the pattern stages zero-copy.
#[inline]
pub(crate) fn replace_with_space<'a>(re: &Regex, text: &'a str) -> Cow<'a, str> {
    re.replace_all(text, " ")
}
