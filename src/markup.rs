//! Markup stripper: markup-bearing text in, visible plain text out.
//!
//! The parser is a single forward scan. `<` only opens markup when followed
//! by a letter, `/`, `!` or `?`, so prose such as `x < y` survives. Script
//! and style elements are dropped with their content, comments and
//! declarations are dropped, CDATA content is kept verbatim, and entities in
//! text are decoded. Every markup boundary becomes a single space and the
//! result is whitespace-collapsed and trimmed.
//!
//! A tag that never closes is kept as text, and a script or style element
//! that never closes runs to the end of the input. Input that ends inside a
//! comment, CDATA section or declaration is a parse failure; [`strip`] then
//! falls back to deleting anything shaped like a tag.

use memchr::{memchr, memmem};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};
use thiserror::Error;
use tracing::debug;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag fallback regex"));

/// Elements whose content is never visible.
const INVISIBLE_ELEMENTS: [&str; 2] = ["script", "style"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("input ends inside an unterminated {0}")]
    Unterminated(&'static str),
}

/// Extract visible text. Never fails: unparsable input falls back to a
/// regex tag removal that replaces each `<...>` with a space.
pub fn strip(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }
    match parse(text) {
        Ok(visible) if visible == text => Cow::Borrowed(text),
        Ok(visible) => Cow::Owned(visible),
        Err(e) => {
            debug!(error = %e, "markup parse failed, falling back to tag regex");
            TAG_RE.replace_all(text, " ")
        }
    }
}

/// Strict parse. Returns the visible text, whitespace-collapsed and trimmed.
pub fn parse(text: &str) -> Result<String, MarkupError> {
    let mut fragments = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = find_markup_start(rest) {
        push_text(&mut fragments, &rest[..pos]);
        let mark = fragments.len();
        fragments.push(' ');
        match skip_markup(&rest[pos..], &mut fragments)? {
            Some(after) => {
                fragments.push(' ');
                rest = after;
            }
            None => {
                // No closing `>` anywhere: the rest is prose.
                fragments.truncate(mark);
                rest = &rest[pos..];
                break;
            }
        }
    }
    push_text(&mut fragments, rest);

    Ok(collapse(&fragments))
}

/// Byte offset of the next `<` that really opens markup.
fn find_markup_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(offset) = memchr(b'<', &bytes[from..]) {
        let at = from + offset;
        match bytes.get(at + 1) {
            Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?') => {
                return Some(at);
            }
            _ => from = at + 1,
        }
    }
    None
}

/// Consume one markup construct starting at `s[0] == '<'` and return what
/// follows it. CDATA content is appended to `out`. `Ok(None)` means the tag
/// is never closed.
fn skip_markup<'a>(s: &'a str, out: &mut String) -> Result<Option<&'a str>, MarkupError> {
    if let Some(body) = s.strip_prefix("<!--") {
        let end = memmem::find(body.as_bytes(), b"-->")
            .ok_or(MarkupError::Unterminated("comment"))?;
        return Ok(Some(&body[end + 3..]));
    }
    if let Some(body) = s.strip_prefix("<![CDATA[") {
        let end = memmem::find(body.as_bytes(), b"]]>")
            .ok_or(MarkupError::Unterminated("CDATA section"))?;
        out.push_str(&body[..end]);
        return Ok(Some(&body[end + 3..]));
    }
    if s.starts_with("<!") || s.starts_with("<?") {
        let end = memchr(b'>', s.as_bytes()).ok_or(MarkupError::Unterminated("declaration"))?;
        return Ok(Some(&s[end + 1..]));
    }

    let Some(end) = tag_end(s) else {
        return Ok(None);
    };
    let after = &s[end + 1..];
    let tag = &s[1..end];
    let self_closing = tag.ends_with('/');

    match INVISIBLE_ELEMENTS
        .into_iter()
        .find(|name| opens_element(tag, name))
    {
        Some(name) if !self_closing => Ok(Some(skip_element_body(after, name))),
        _ => Ok(Some(after)),
    }
}

/// Index of the `>` that closes the tag at the start of `s`.
///
/// A quote only opens an attribute value right after `=` (whitespace
/// allowed in between), so `title=don't` is unquoted. If a quoted value never
/// closes, the first `>` wins.
fn tag_end(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut quote: Option<u8> = None;
    let mut after_eq = false;
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        match (quote, b) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') if after_eq => {
                quote = Some(b);
                after_eq = false;
            }
            (None, b'>') => return Some(i),
            (None, b'=') => after_eq = true,
            (None, b) if b.is_ascii_whitespace() => {}
            (None, _) => after_eq = false,
        }
    }
    memchr(b'>', bytes)
}

/// `tag` is the text between `<` and `>`.
fn opens_element(tag: &str, name: &str) -> bool {
    let Some(head) = tag.get(..name.len()) else {
        return false;
    };
    head.eq_ignore_ascii_case(name)
        && tag[name.len()..]
            .chars()
            .next()
            .is_none_or(|c| c.is_ascii_whitespace() || c == '/' || c == '>')
}

/// Skip everything up to and including `</name ...>`. An element that is
/// never closed swallows the rest of the input.
fn skip_element_body<'a>(body: &'a str, name: &str) -> &'a str {
    let bytes = body.as_bytes();
    for at in memmem::find_iter(bytes, b"</") {
        let candidate = &body[at + 2..];
        if opens_element(candidate, name) {
            return match memchr(b'>', candidate.as_bytes()) {
                Some(close) => &candidate[close + 1..],
                None => "",
            };
        }
    }
    ""
}

#[inline]
fn push_text(out: &mut String, fragment: &str) {
    if memchr(b'&', fragment.as_bytes()).is_some() {
        html_escape::decode_html_entities_to_string(fragment, out);
    } else {
        out.push_str(fragment);
    }
}

fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
