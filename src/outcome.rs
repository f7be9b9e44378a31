//! The two observable outcomes of a cleaning call.

use std::{borrow::Cow, fmt};

/// Why an input produced no usable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The input was not text at all.
    NotText,
    /// The language detector named a language other than the required one.
    Language { detected: String, expected: String },
    /// Fewer scalar values survived cleaning than the configured minimum.
    TooShort { len: usize, min: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotText => f.write_str("input is not text"),
            Rejection::Language { detected, expected } => {
                write!(f, "detected language `{detected}`, expected `{expected}`")
            }
            Rejection::TooShort { len, min } => {
                write!(f, "cleaned length {len} is below the minimum of {min}")
            }
        }
    }
}

/// Result of [`Cleaner::clean`](crate::Cleaner::clean): cleaned text, or an
/// explicit rejection. A rejection is distinct from an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleaned<'a> {
    Text(Cow<'a, str>),
    Rejected(Rejection),
}

impl<'a> Cleaned<'a> {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Cleaned::Rejected(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cleaned::Text(text) => Some(text),
            Cleaned::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Cleaned::Text(_) => None,
            Cleaned::Rejected(reason) => Some(reason),
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Cleaned::Text(text) => Some(text.into_owned()),
            Cleaned::Rejected(_) => None,
        }
    }

    pub fn into_owned(self) -> Cleaned<'static> {
        match self {
            Cleaned::Text(text) => Cleaned::Text(Cow::Owned(text.into_owned())),
            Cleaned::Rejected(reason) => Cleaned::Rejected(reason),
        }
    }
}

impl From<Cleaned<'_>> for Option<String> {
    fn from(cleaned: Cleaned<'_>) -> Self {
        cleaned.into_option()
    }
}

impl PartialEq<&str> for Cleaned<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}
