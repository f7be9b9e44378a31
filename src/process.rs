//! Process abstraction.
//!
//! `DynamicProcess` runs its stages in insertion order. Every stage failure is
//! absorbed here: the error is logged and the text from before the stage is
//! carried forward, so no single stage can take the pipeline down.
use crate::stage::{Stage, StageError};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};
use tracing::{trace, warn};

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Process for DynamicProcess {
    fn process<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text);
        }
        text
    }
}

/// Run one stage, falling back to the incoming text on any error.
fn run_stage<'a>(stage: &dyn Stage, text: Cow<'a, str>) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => match attempt(stage, s) {
            Ok(out) => out,
            Err(e) => {
                absorb(stage, &e);
                Cow::Borrowed(s)
            }
        },
        Cow::Owned(s) => {
            // The output may borrow `s`; resolve it to an owned value or to
            // "unchanged" before `s` is moved back out.
            let changed = match attempt(stage, &s) {
                Ok(Cow::Borrowed(out)) if same_slice(out, &s) => None,
                Ok(out) => Some(out.into_owned()),
                Err(e) => {
                    absorb(stage, &e);
                    None
                }
            };
            Cow::Owned(changed.unwrap_or(s))
        }
    }
}

#[inline]
fn attempt<'a>(stage: &dyn Stage, text: &'a str) -> Result<Cow<'a, str>, StageError> {
    if !stage.needs_apply(text)? {
        return Ok(Cow::Borrowed(text));
    }
    trace!(stage = stage.name(), len = text.len(), "applying stage");
    stage.apply(text)
}

#[inline]
fn same_slice(a: &str, b: &str) -> bool {
    a.as_ptr() == b.as_ptr() && a.len() == b.len()
}

fn absorb(stage: &dyn Stage, err: &StageError) {
    warn!(stage = stage.name(), error = %err, "stage failed, keeping text unchanged");
}
