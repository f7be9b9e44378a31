//! External capabilities the pipeline delegates to.
//!
//! Each capability is a small trait with one operation. The pipeline treats
//! them as black boxes: any `Err` they return is absorbed and the text is left
//! as it was. Default implementations live in the submodules; callers can
//! inject their own through [`CleanerBuilder`](crate::CleanerBuilder).

pub mod ascii_fold;
pub mod emoji;
#[cfg(feature = "whatlang")]
pub mod lang_detect;
pub mod mojibake;

pub use ascii_fold::AsciiFolder;
pub use emoji::EmojiAliaser;
pub use mojibake::MojibakeFixer;
#[cfg(feature = "whatlang")]
pub use lang_detect::WhatlangDetector;

use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("{collaborator} failed: {reason}")]
    Failed {
        collaborator: &'static str,
        reason: String,
    },

    #[error("{0} cannot handle this input")]
    Unsupported(&'static str),
}

/// Repairs mojibake and other encoding damage.
pub trait TextFixer: Send + Sync {
    fn fix<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, CollaboratorError>;
}

/// Folds accented and non-ASCII characters to ASCII approximations.
pub trait Transliterator: Send + Sync {
    fn transliterate<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, CollaboratorError>;
}

/// What an [`EmojiTransform`] does with each emoji it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    /// Swap the emoji for its textual alias, e.g. `:thumbs_up:`.
    Alias,
    /// Delete the emoji outright.
    Remove,
}

/// Detects emoji and either deletes them or swaps them for a textual alias.
pub trait EmojiTransform: Send + Sync {
    fn transform<'a>(
        &self,
        text: &'a str,
        mode: EmojiMode,
    ) -> Result<Cow<'a, str>, CollaboratorError>;
}

/// Identifies the natural language of a text.
///
/// `Ok(None)` means the detector had no confident answer.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<Option<String>, CollaboratorError>;
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn detect(&self, text: &str) -> Result<Option<String>, CollaboratorError> {
        Ok(self(text))
    }
}
