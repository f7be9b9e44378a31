use crate::{
    collaborator::{
        AsciiFolder, EmojiAliaser, EmojiTransform, LanguageDetector, MojibakeFixer, TextFixer,
        Transliterator,
    },
    config::CleanConfig,
    gate::{Gate, LanguageGate, MinLength},
    outcome::{Cleaned, Rejection},
    process::{DynamicProcess, Process},
    stage::{
        collapse_whitespace::CollapseWhitespace, fix_text::FixText, handle_emojis::HandleEmojis,
        lower_case::LowerCase, remove_emails::RemoveEmails,
        remove_non_printable::RemoveNonPrintable, remove_punctuation::RemovePunctuation,
        remove_urls::RemoveUrls, strip_html::StripHtml, transliterate::Transliterate,
    },
};
use serde_json::Value;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::debug;

/// The cleaning pipeline.
///
/// Built once from a [`CleanConfig`]; immutable afterwards and safe to share
/// across threads. Each call to [`clean`](Cleaner::clean) is independent.
pub struct Cleaner {
    config: CleanConfig,
    process: DynamicProcess,
    gates: SmallVec<[Arc<dyn Gate>; 2]>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanConfig::default())
    }
}

impl Cleaner {
    /// Pipeline with the default collaborators.
    pub fn new(config: CleanConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::default()
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Names of the enabled stages, in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.process.stage_names()
    }

    /// Names of the enabled gates, in execution order.
    pub fn gate_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.gates.iter().map(|g| g.name())
    }

    /// Clean one string. Stage failures leave the text unchanged; only the
    /// language and length gates can reject.
    pub fn clean<'a>(&self, text: &'a str) -> Cleaned<'a> {
        let text = self.process.process(Cow::Borrowed(text));
        for gate in &self.gates {
            if let Err(reason) = gate.check(&text) {
                debug!(gate = gate.name(), %reason, "input rejected");
                return Cleaned::Rejected(reason);
            }
        }
        Cleaned::Text(text)
    }

    /// `None` is rejected as non-text.
    pub fn clean_opt<'a>(&self, text: Option<&'a str>) -> Cleaned<'a> {
        match text {
            Some(text) => self.clean(text),
            None => reject_non_text("none"),
        }
    }

    /// Clean a dynamically typed value. Anything but a JSON string is
    /// rejected as non-text before any stage runs.
    pub fn clean_value<'a>(&self, value: &'a Value) -> Cleaned<'a> {
        match value {
            Value::String(text) => self.clean(text),
            Value::Null => reject_non_text("null"),
            Value::Bool(_) => reject_non_text("bool"),
            Value::Number(_) => reject_non_text("number"),
            Value::Array(_) => reject_non_text("array"),
            Value::Object(_) => reject_non_text("object"),
        }
    }
}

fn reject_non_text(kind: &'static str) -> Cleaned<'static> {
    debug!(kind, "input rejected: not text");
    Cleaned::Rejected(Rejection::NotText)
}

/// Assembles a [`Cleaner`], optionally with custom collaborators.
pub struct CleanerBuilder {
    config: CleanConfig,
    fixer: Arc<dyn TextFixer>,
    transliterator: Arc<dyn Transliterator>,
    emoji: Arc<dyn EmojiTransform>,
    detector: Option<Arc<dyn LanguageDetector>>,
}

impl Default for CleanerBuilder {
    fn default() -> Self {
        Self {
            config: CleanConfig::default(),
            fixer: Arc::new(MojibakeFixer::default()),
            transliterator: Arc::new(AsciiFolder),
            emoji: Arc::new(EmojiAliaser),
            detector: default_detector(),
        }
    }
}

#[cfg(feature = "whatlang")]
fn default_detector() -> Option<Arc<dyn LanguageDetector>> {
    Some(Arc::new(crate::collaborator::WhatlangDetector::default()))
}

#[cfg(not(feature = "whatlang"))]
fn default_detector() -> Option<Arc<dyn LanguageDetector>> {
    None
}

impl CleanerBuilder {
    pub fn config(mut self, config: CleanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fixer<T: TextFixer + 'static>(mut self, fixer: T) -> Self {
        self.fixer = Arc::new(fixer);
        self
    }

    pub fn transliterator<T: Transliterator + 'static>(mut self, transliterator: T) -> Self {
        self.transliterator = Arc::new(transliterator);
        self
    }

    pub fn emoji<T: EmojiTransform + 'static>(mut self, emoji: T) -> Self {
        self.emoji = Arc::new(emoji);
        self
    }

    pub fn language_detector<T: LanguageDetector + 'static>(mut self, detector: T) -> Self {
        self.detector = Some(Arc::new(detector));
        self
    }

    /// Leave the detector slot empty; the language gate becomes a no-op.
    pub fn without_language_detector(mut self) -> Self {
        self.detector = None;
        self
    }

    pub fn build(self) -> Cleaner {
        let c = &self.config;
        let mut process = DynamicProcess::new();

        if c.fix_text {
            process = process.push(FixText::new(self.fixer));
        }
        if c.strip_html {
            process = process.push(StripHtml);
        }
        if c.remove_urls {
            process = process.push(RemoveUrls);
        }
        if c.remove_emails {
            process = process.push(RemoveEmails);
        }
        if c.normalize_unicode {
            process = process.push(Transliterate::new(self.transliterator));
        }
        if let Some(mode) = c.emoji_mode() {
            process = process.push(HandleEmojis::new(self.emoji, mode));
        }
        if c.remove_non_printable {
            process = process.push(RemoveNonPrintable);
        }
        if c.lowercase {
            process = process.push(LowerCase);
        }
        if c.remove_punctuation {
            process = process.push(RemovePunctuation);
        }
        if c.remove_extra_whitespace {
            process = process.push(CollapseWhitespace);
        }

        let mut gates: SmallVec<[Arc<dyn Gate>; 2]> = SmallVec::new();
        if let (Some(detector), Some(expected)) = (self.detector, &c.language_filter) {
            gates.push(Arc::new(LanguageGate::new(detector, expected.clone())));
        }
        if c.min_length > 0 {
            gates.push(Arc::new(MinLength::new(c.min_length)));
        }

        Cleaner {
            config: self.config,
            process,
            gates,
        }
    }
}
