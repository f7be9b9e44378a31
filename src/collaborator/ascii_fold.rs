//! collaborator/ascii_fold.rs
//! Accent and script folding to ASCII, backed by the `unidecode` tables.
//! "Café Müller" → "Cafe Muller", "Œuvre" → "OEuvre", "北京" → "Bei Jing ".
//! Characters without a mapping (most emoji among them) fold to nothing.
//! C1 controls (U+0080–U+009F) are passed through untouched: the `unidecode`
//! table reads them as Windows-1252 and would turn them into letters.

use super::{CollaboratorError, Transliterator};
use std::borrow::Cow;
use unidecode::unidecode_char;

#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiFolder;

impl Transliterator for AsciiFolder {
    fn transliterate<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, CollaboratorError> {
        if text.is_ascii() {
            return Ok(Cow::Borrowed(text));
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c < '\u{A0}' {
                out.push(c);
            } else {
                out.push_str(unidecode_char(c));
            }
        }
        Ok(Cow::Owned(out))
    }
}
