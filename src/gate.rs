//! Accept/reject decisions that run after every text stage.
//!
//! A gate never transforms text. It either lets the cleaned text through or
//! names the [`Rejection`] that ends processing.

pub mod language;
pub mod min_length;

pub use language::LanguageGate;
pub use min_length::MinLength;

use crate::outcome::Rejection;

pub trait Gate: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, text: &str) -> Result<(), Rejection>;
}
