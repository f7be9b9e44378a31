use crate::{gate::Gate, outcome::Rejection};

/// Rejects text shorter than `min` Unicode scalar values. The bound is
/// inclusive: text of exactly `min` scalars passes.
pub struct MinLength {
    min: usize,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Gate for MinLength {
    fn name(&self) -> &'static str {
        "min_length"
    }

    fn check(&self, text: &str) -> Result<(), Rejection> {
        let len = text.chars().count();
        if len < self.min {
            return Err(Rejection::TooShort { len, min: self.min });
        }
        Ok(())
    }
}
