//! Pipeline configuration.
//!
//! [`CleanConfig`] is a plain struct with one field per option. It can be
//! built in Rust with struct-update syntax, deserialized with serde, or
//! overlaid from a loose JSON object with [`CleanConfig::from_overrides`],
//! which never fails: unknown keys are ignored and a mistyped value disables
//! the option it belongs to.

use crate::collaborator::EmojiMode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration overrides must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Fold case after the other transforms.
    pub lowercase: bool,
    /// Repair encoding damage before anything else.
    pub fix_text: bool,
    /// Remove markup, keeping visible text.
    pub strip_html: bool,
    pub remove_urls: bool,
    pub remove_emails: bool,
    /// Fold accented and non-ASCII characters to ASCII.
    pub normalize_unicode: bool,
    /// Collapse whitespace runs and trim.
    pub remove_extra_whitespace: bool,
    pub remove_punctuation: bool,
    /// Remove emoji. See [`CleanConfig::emoji_mode`] for how this interacts
    /// with `emoji_replace_with_alias`.
    pub remove_emojis: bool,
    pub emoji_replace_with_alias: bool,
    /// Replace U+0000–U+001F and U+007F–U+009F with spaces.
    pub remove_non_printable: bool,
    /// Required language code, e.g. `"en"`. `None` disables the gate.
    pub language_filter: Option<String>,
    /// Minimum accepted length in Unicode scalar values, inclusive.
    pub min_length: usize,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            fix_text: true,
            strip_html: true,
            remove_urls: true,
            remove_emails: true,
            normalize_unicode: true,
            remove_extra_whitespace: true,
            remove_punctuation: false,
            remove_emojis: false,
            emoji_replace_with_alias: true,
            remove_non_printable: true,
            language_filter: None,
            min_length: 1,
        }
    }
}

impl CleanConfig {
    /// Overlay `overrides` onto the defaults, key by key.
    pub fn from_overrides(overrides: &Map<String, Value>) -> Self {
        let mut cfg = Self::default();
        for (key, value) in overrides {
            match key.as_str() {
                "lowercase" => cfg.lowercase = flag(key, value),
                "fix_text" => cfg.fix_text = flag(key, value),
                "strip_html" => cfg.strip_html = flag(key, value),
                "remove_urls" => cfg.remove_urls = flag(key, value),
                "remove_emails" => cfg.remove_emails = flag(key, value),
                "normalize_unicode" => cfg.normalize_unicode = flag(key, value),
                "remove_extra_whitespace" => cfg.remove_extra_whitespace = flag(key, value),
                "remove_punctuation" => cfg.remove_punctuation = flag(key, value),
                "remove_emojis" => cfg.remove_emojis = flag(key, value),
                "emoji_replace_with_alias" => cfg.emoji_replace_with_alias = flag(key, value),
                "remove_non_printable" => cfg.remove_non_printable = flag(key, value),
                "language_filter" => cfg.language_filter = language(value),
                "min_length" => cfg.min_length = min_length(value),
                _ => debug!(key = %key, "ignoring unrecognized option"),
            }
        }
        cfg
    }

    /// Parse a JSON object of overrides and overlay it onto the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self::from_overrides(&map)),
            _ => Err(ConfigError::NotAnObject),
        }
    }

    /// Which emoji transform, if any, the pipeline runs.
    ///
    /// With `remove_emojis` on, removed emoji are replaced by their alias
    /// only when `emoji_replace_with_alias` is **off**, and deleted when it
    /// is on. This inverted coupling is kept for compatibility with existing
    /// configurations. With `remove_emojis` off, `emoji_replace_with_alias`
    /// alone substitutes aliases.
    pub fn emoji_mode(&self) -> Option<EmojiMode> {
        match (self.remove_emojis, self.emoji_replace_with_alias) {
            (true, false) => Some(EmojiMode::Alias),
            (true, true) => Some(EmojiMode::Remove),
            (false, true) => Some(EmojiMode::Alias),
            (false, false) => None,
        }
    }
}

fn flag(key: &str, value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        other => {
            warn!(key, value = %other, "expected a boolean, disabling option");
            false
        }
    }
}

fn language(value: &Value) -> Option<String> {
    match value {
        Value::String(code) if !code.trim().is_empty() => Some(code.trim().to_string()),
        Value::String(_) | Value::Null => None,
        other => {
            warn!(value = %other, "language_filter must be a string, disabling language gate");
            None
        }
    }
}

fn min_length(value: &Value) -> usize {
    match value.as_u64().and_then(|n| usize::try_from(n).ok()) {
        Some(n) => n,
        None => {
            warn!(value = %value, "min_length must be a non-negative integer, disabling length gate");
            0
        }
    }
}
