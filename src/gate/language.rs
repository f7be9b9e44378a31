//! gate/language.rs
//! Rejects text whose detected language differs from the required one.
//!
//! The gate only ever rejects on a positive, mismatching answer. Blank text,
//! a detector error and a detector with no answer all let the text through.

use crate::{collaborator::LanguageDetector, gate::Gate, outcome::Rejection};
use std::sync::Arc;
use tracing::warn;

pub struct LanguageGate {
    detector: Arc<dyn LanguageDetector>,
    expected: String,
}

impl LanguageGate {
    pub fn new(detector: Arc<dyn LanguageDetector>, expected: impl Into<String>) -> Self {
        Self {
            detector,
            expected: expected.into(),
        }
    }
}

impl Gate for LanguageGate {
    fn name(&self) -> &'static str {
        "language"
    }

    fn check(&self, text: &str) -> Result<(), Rejection> {
        if text.trim().is_empty() {
            return Ok(());
        }
        match self.detector.detect(text) {
            Ok(Some(detected)) if !detected.eq_ignore_ascii_case(&self.expected) => {
                Err(Rejection::Language {
                    detected,
                    expected: self.expected.clone(),
                })
            }
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(error = %e, "language detection failed, skipping gate");
                Ok(())
            }
        }
    }
}
