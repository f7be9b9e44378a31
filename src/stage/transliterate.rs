//! stage/transliterate.rs – **Lossy ASCII folding**
//! * "Crème Brûlée" → "Creme Brulee", "Ærøskøbing" → "AEroskobing"
//! * Delegates to an injected [`Transliterator`]
//! * Zero-copy for pure ASCII input

use crate::{
    collaborator::{AsciiFolder, Transliterator},
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::Arc};

pub struct Transliterate {
    inner: Arc<dyn Transliterator>,
}

impl Transliterate {
    pub fn new(inner: Arc<dyn Transliterator>) -> Self {
        Self { inner }
    }
}

impl Default for Transliterate {
    fn default() -> Self {
        Self::new(Arc::new(AsciiFolder))
    }
}

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(!text.is_ascii())
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        self.inner
            .transliterate(text)
            .map_err(|source| StageError::Collaborator {
                stage: self.name(),
                source,
            })
    }
}
