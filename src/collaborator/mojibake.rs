//! collaborator/mojibake.rs
//! Repairs text damaged by encoding round-trips and a handful of other
//! crawl artefacts.
//!
//! Steps, in order (each one zero-copy when it has nothing to do):
//! 1. Strip ANSI terminal escape sequences (`\x1b[31m`).
//! 2. Decode HTML entities when the text contains no markup (`caf&eacute;`).
//! 3. Undo UTF-8 bytes that were decoded as Windows-1252 / Latin-1
//!    (`cafÃ©` → `café`), repeated for double-encoded text.
//! 4. Expand Latin typographic ligatures (`ﬁ` → `fi`).
//! 5. Straighten curly quotes.
//! 6. Unify line breaks to `\n`.
//! 7. Compose to NFC.

use super::{CollaboratorError, TextFixer};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use memchr::memchr;
use phf::{Map, phf_map};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static NFC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfc);

static TERMINAL_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("terminal escape regex"));

/// Layers of mis-decoding we are willing to peel off.
const MAX_REDECODE_PASSES: usize = 3;

/// The Windows-1252 code points that do not sit at their Latin-1 position,
/// keyed by the character they decode to.
static CP1252_SPECIALS: Map<char, u8> = phf_map! {
    '€' => 0x80, '‚' => 0x82, 'ƒ' => 0x83, '„' => 0x84, '…' => 0x85,
    '†' => 0x86, '‡' => 0x87, 'ˆ' => 0x88, '‰' => 0x89, 'Š' => 0x8A,
    '‹' => 0x8B, 'Œ' => 0x8C, 'Ž' => 0x8E, '‘' => 0x91, '’' => 0x92,
    '“' => 0x93, '”' => 0x94, '•' => 0x95, '–' => 0x96, '—' => 0x97,
    '˜' => 0x98, '™' => 0x99, 'š' => 0x9A, '›' => 0x9B, 'œ' => 0x9C,
    'ž' => 0x9E, 'Ÿ' => 0x9F,
};

/// Encoding repair with per-step switches. Everything is on by default.
#[derive(Debug, Clone, Copy)]
pub struct MojibakeFixer {
    pub remove_terminal_escapes: bool,
    pub unescape_html: bool,
    pub fix_encoding: bool,
    pub fix_latin_ligatures: bool,
    pub uncurl_quotes: bool,
    pub fix_line_breaks: bool,
    pub normalize_nfc: bool,
}

impl Default for MojibakeFixer {
    fn default() -> Self {
        Self {
            remove_terminal_escapes: true,
            unescape_html: true,
            fix_encoding: true,
            fix_latin_ligatures: true,
            uncurl_quotes: true,
            fix_line_breaks: true,
            normalize_nfc: true,
        }
    }
}

impl TextFixer for MojibakeFixer {
    fn fix<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, CollaboratorError> {
        let mut out = Cow::Borrowed(text);
        if self.remove_terminal_escapes {
            out = then(out, |s| TERMINAL_ESCAPE_RE.replace_all(s, ""));
        }
        if self.unescape_html {
            out = then(out, unescape_html);
        }
        if self.fix_encoding {
            out = then(out, fix_encoding);
        }
        if self.fix_latin_ligatures {
            out = then(out, fix_latin_ligatures);
        }
        if self.uncurl_quotes {
            out = then(out, uncurl_quotes);
        }
        if self.fix_line_breaks {
            out = then(out, fix_line_breaks);
        }
        if self.normalize_nfc {
            out = then(out, |s| NFC.normalize(s));
        }
        Ok(out)
    }
}

/// Chain a zero-copy step onto a possibly owned value.
fn then<'a, F>(text: Cow<'a, str>, step: F) -> Cow<'a, str>
where
    F: for<'b> Fn(&'b str) -> Cow<'b, str>,
{
    match text {
        Cow::Borrowed(s) => step(s),
        Cow::Owned(s) => {
            let changed = match step(&s) {
                Cow::Borrowed(_) => None,
                Cow::Owned(o) => Some(o),
            };
            Cow::Owned(changed.unwrap_or(s))
        }
    }
}

/// Entities are only decoded when no `<` is present; otherwise the markup
/// stripper owns entity handling.
fn unescape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if memchr(b'&', bytes).is_none() || memchr(b'<', bytes).is_some() {
        return Cow::Borrowed(text);
    }
    html_escape::decode_html_entities(text)
}

fn fix_encoding(text: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(text);
    for _ in 0..MAX_REDECODE_PASSES {
        match redecode_utf8(&current) {
            Some(fixed) => current = Cow::Owned(fixed),
            None => break,
        }
    }
    current
}

/// Re-encode `text` as Windows-1252 bytes and try to read them back as UTF-8.
///
/// Returns `None` when the text is plain ASCII, contains a character outside
/// the single-byte range, or the bytes are not valid UTF-8. Genuine Latin-1
/// prose ("café") fails the UTF-8 check and is left alone.
fn redecode_utf8(text: &str) -> Option<String> {
    if text.is_ascii() {
        return None;
    }
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        bytes.push(single_byte(c)?);
    }
    String::from_utf8(bytes).ok()
}

/// "Sloppy" Windows-1252: the five undefined slots fall back to Latin-1.
#[inline]
fn single_byte(c: char) -> Option<u8> {
    match c as u32 {
        cp @ 0..=0xFF => Some(cp as u8),
        _ => CP1252_SPECIALS.get(&c).copied(),
    }
}

fn ligature(c: char) -> Option<&'static str> {
    Some(match c {
        '\u{FB00}' => "ff",
        '\u{FB01}' => "fi",
        '\u{FB02}' => "fl",
        '\u{FB03}' => "ffi",
        '\u{FB04}' => "ffl",
        '\u{FB05}' | '\u{FB06}' => "st",
        _ => return None,
    })
}

fn fix_latin_ligatures(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| ligature(c).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match ligature(c) {
            Some(expanded) => out.push_str(expanded),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn straight_quote(c: char) -> Option<char> {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => Some('\''),
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => Some('"'),
        _ => None,
    }
}

fn uncurl_quotes(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| straight_quote(c).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| straight_quote(c).unwrap_or(c))
            .collect(),
    )
}

#[inline]
fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

fn fix_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_line_break) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        out.push(if is_line_break(c) { '\n' } else { c });
    }
    Cow::Owned(out)
}
