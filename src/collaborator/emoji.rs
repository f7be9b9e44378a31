//! collaborator/emoji.rs
//! Emoji detection backed by the `emojis` crate (Unicode CLDR data).
//!
//! Sequences are matched greedily, so ZWJ families, skin-tone modifiers,
//! flags and keycaps are handled as one unit: "👍🏽" is one thumbs-up, not a
//! thumbs-up followed by a stray modifier.

use super::{CollaboratorError, EmojiMode, EmojiTransform};
use emojis::Emoji;
use std::borrow::Cow;

/// Longest emoji sequence we try to match, in scalar values.
/// Family ZWJ sequences with skin tones top out at ten.
const MAX_SEQUENCE_CHARS: usize = 10;

#[derive(Debug, Default, Clone, Copy)]
pub struct EmojiAliaser;

impl EmojiTransform for EmojiAliaser {
    fn transform<'a>(
        &self,
        text: &'a str,
        mode: EmojiMode,
    ) -> Result<Cow<'a, str>, CollaboratorError> {
        let mut out: Option<String> = None;
        let mut copied = 0;
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            match longest_emoji(rest) {
                Some((len, emoji)) => {
                    let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                    buf.push_str(&text[copied..i]);
                    if mode == EmojiMode::Alias {
                        push_alias(buf, emoji);
                    }
                    i += len;
                    copied = i;
                }
                None => i += rest.chars().next().map_or(1, char::len_utf8),
            }
        }

        Ok(match out {
            None => Cow::Borrowed(text),
            Some(mut buf) => {
                buf.push_str(&text[copied..]);
                Cow::Owned(buf)
            }
        })
    }
}

/// Returns the byte length and data of the longest emoji at the start of `rest`.
fn longest_emoji(rest: &str) -> Option<(usize, &'static Emoji)> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    // Only keycaps ("1️⃣", "#️⃣") start with an ASCII scalar.
    if first.is_ascii() && !matches!(chars.next(), Some('\u{FE0F}' | '\u{20E3}')) {
        return None;
    }

    let mut best = None;
    for (idx, c) in rest.char_indices().take(MAX_SEQUENCE_CHARS) {
        let end = idx + c.len_utf8();
        if let Some(emoji) = emojis::get(&rest[..end]) {
            best = Some((end, emoji));
        }
    }
    best
}

/// `:snake_case_name:`, the alias style of the CLDR short names.
fn push_alias(buf: &mut String, emoji: &Emoji) {
    buf.push(':');
    for c in emoji.name().chars() {
        match c {
            ' ' | '-' => buf.push('_'),
            ':' | ',' | '.' | '\'' | '’' | '“' | '”' | '(' | ')' | '!' => {}
            c => buf.push(c),
        }
    }
    buf.push(':');
}
