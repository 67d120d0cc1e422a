//! Chunking
//!
//! Splits a sequence into consecutive groups of at most `chunk_size`
//! frames, optionally ending a group early where its progression breaks.

use tracing::trace;

use super::Sequence;
use crate::progression;

impl Sequence {
    /// Partition the frames into consecutive chunks.
    ///
    /// A chunk closes when it holds `chunk_size` frames, at the last frame,
    /// or, with `enforce_progressions`, when the next frame would break the
    /// chunk's constant gap. Chunks do not inherit the chunk size.
    pub fn chunks(&self, enforce_progressions: bool) -> Vec<Sequence> {
        let mut chunks = Vec::new();
        let mut current: Vec<i64> = Vec::with_capacity(self.chunk_size.min(self.frames.len()));

        for (i, &frame) in self.frames.iter().enumerate() {
            current.push(frame);
            let close = match self.frames.get(i + 1) {
                None => true,
                Some(_) if current.len() >= self.chunk_size => true,
                Some(&next) => enforce_progressions && !progression::extends(&current, next),
            };
            if close {
                chunks.push(Sequence::from_canonical(std::mem::take(&mut current)));
            }
        }

        trace!(
            "split {} frames into {} chunks (size {}, enforce {})",
            self.frames.len(),
            chunks.len(),
            self.chunk_size,
            enforce_progressions
        );
        chunks
    }

    /// Chunks (with progressions enforced) that share a frame with `other`
    pub fn intersecting_chunks(&self, other: &Sequence) -> Vec<Sequence> {
        self.chunks(true)
            .into_iter()
            .filter(|chunk| chunk.intersects(other))
            .collect()
    }
}
