//! Evenly spaced subsampling

use super::Sequence;

impl Sequence {
    /// Pick `count` representative frames, preserving order.
    ///
    /// `count` is clamped to `1..=len`. The frames are split into `count`
    /// equal real-valued buckets and the frame at the centre of each bucket
    /// is taken: index `floor(gap / 2 + i * gap)` with `gap = len / count`.
    pub fn subsample(&self, count: usize) -> Sequence {
        let len = self.frames.len();
        if len == 0 {
            return Sequence::new();
        }
        let count = count.clamp(1, len);
        let gap = len as f64 / count as f64;

        let mut frames = Vec::with_capacity(count);
        let mut pos = gap / 2.0;
        for _ in 0..count {
            let index = (pos.floor() as usize).min(len - 1);
            frames.push(self.frames[index]);
            pos += gap;
        }
        Sequence::from_canonical(frames)
    }
}
