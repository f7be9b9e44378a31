//! stage/fix_text.rs
//! Encoding repair through an injected [`TextFixer`]. Runs first so every
//! later stage sees real characters instead of mojibake.

use crate::{
    collaborator::{MojibakeFixer, TextFixer},
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::Arc};

pub struct FixText {
    fixer: Arc<dyn TextFixer>,
}

impl FixText {
    pub fn new(fixer: Arc<dyn TextFixer>) -> Self {
        Self { fixer }
    }
}

impl Default for FixText {
    fn default() -> Self {
        Self::new(Arc::new(MojibakeFixer::default()))
    }
}

impl Stage for FixText {
    fn name(&self) -> &'static str {
        "fix_text"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(!text.is_empty())
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        self.fixer
            .fix(text)
            .map_err(|source| StageError::Collaborator {
                stage: self.name(),
                source,
            })
    }
}
