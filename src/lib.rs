pub mod cleaner;
pub mod collaborator;
pub mod config;
pub mod gate;
pub mod markup;
pub mod outcome;
pub mod process;
pub mod stage;
#[cfg(test)]
pub(crate) mod testing;

pub use cleaner::{Cleaner, CleanerBuilder};
pub use collaborator::{
    AsciiFolder, CollaboratorError, EmojiAliaser, EmojiMode, EmojiTransform, LanguageDetector,
    MojibakeFixer, TextFixer, Transliterator,
};
#[cfg(feature = "whatlang")]
pub use collaborator::WhatlangDetector;
pub use config::{CleanConfig, ConfigError};
pub use outcome::{Cleaned, Rejection};
pub use stage::collapse_whitespace::CollapseWhitespace;
pub use stage::fix_text::FixText;
pub use stage::handle_emojis::HandleEmojis;
pub use stage::lower_case::LowerCase;
pub use stage::remove_emails::RemoveEmails;
pub use stage::remove_non_printable::RemoveNonPrintable;
pub use stage::remove_punctuation::RemovePunctuation;
pub use stage::remove_urls::RemoveUrls;
pub use stage::strip_html::StripHtml;
pub use stage::transliterate::Transliterate;
