//! stage/handle_emojis.rs
//! Emoji removal or aliasing through an injected [`EmojiTransform`].
//! The mode is fixed at construction; see [`CleanConfig::emoji_mode`] for how
//! the two configuration flags pick it.
//!
//! [`CleanConfig::emoji_mode`]: crate::CleanConfig::emoji_mode

use crate::{
    collaborator::{EmojiAliaser, EmojiMode, EmojiTransform},
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::Arc};

pub struct HandleEmojis {
    transform: Arc<dyn EmojiTransform>,
    mode: EmojiMode,
}

impl HandleEmojis {
    pub fn new(transform: Arc<dyn EmojiTransform>, mode: EmojiMode) -> Self {
        Self { transform, mode }
    }

    pub fn remove() -> Self {
        Self::new(Arc::new(EmojiAliaser), EmojiMode::Remove)
    }

    pub fn alias() -> Self {
        Self::new(Arc::new(EmojiAliaser), EmojiMode::Alias)
    }

    pub fn mode(&self) -> EmojiMode {
        self.mode
    }
}

impl Stage for HandleEmojis {
    fn name(&self) -> &'static str {
        "handle_emojis"
    }

    /// Every emoji, keycaps included, carries at least one non-ASCII scalar.
    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(!text.is_ascii())
    }

    fn apply<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, StageError> {
        self.transform
            .transform(text, self.mode)
            .map_err(|source| StageError::Collaborator {
                stage: self.name(),
                source,
            })
    }
}
