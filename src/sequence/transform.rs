//! Arithmetic transforms
//!
//! Offset, scale and fill build a new sequence and carry the chunk size
//! over to it.

use super::Sequence;
use crate::error::{Error, Result};
use crate::parser;

impl Sequence {
    /// Shift every frame by `delta`. Saturates at the `i64` bounds.
    pub fn offset(&self, delta: i64) -> Sequence {
        let frames: Vec<i64> = self.iter().map(|frame| frame.saturating_add(delta)).collect();
        Sequence::from(frames).with_chunk_size(self.chunk_size)
    }

    /// Multiply every frame by `factor`, truncating toward zero.
    ///
    /// Frames that collapse onto the same value are merged, and a negative
    /// factor reverses the order before the result is re-sorted. Fails with
    /// [`Error::NonFinite`] when `factor` or a product is not finite.
    pub fn scale(&self, factor: f64) -> Result<Sequence> {
        if !factor.is_finite() {
            return Err(Error::NonFinite(factor));
        }
        let frames = self
            .iter()
            .map(|frame| parser::truncate(frame as f64 * factor))
            .collect::<Result<Vec<_>>>()?;
        Ok(Sequence::from(frames).with_chunk_size(self.chunk_size))
    }

    /// Every `step`-th frame from first to last, closing all gaps.
    /// An empty sequence stays empty.
    pub fn fill(&self, step: i64) -> Sequence {
        let frames = match (self.first(), self.last()) {
            (Some(first), Some(last)) => parser::expand_range(first, last, step),
            _ => Vec::new(),
        };
        Sequence::from_canonical(frames).with_chunk_size(self.chunk_size)
    }
}
