//! Set operations between sequences

use super::Sequence;

impl Sequence {
    /// Check whether any frame is shared with `other`
    pub fn intersects(&self, other: &Sequence) -> bool {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return false;
        };
        let (Some(other_first), Some(other_last)) = (other.first(), other.last()) else {
            return false;
        };
        if last < other_first || first > other_last {
            return false;
        }
        self.iter().any(|frame| other.contains(frame))
    }

    /// Frames present in both sequences
    pub fn intersection(&self, other: &Sequence) -> Sequence {
        let frames = self.iter().filter(|&frame| other.contains(frame)).collect();
        Sequence::from_canonical(frames)
    }

    /// Frames present in either sequence
    pub fn union(&self, other: &Sequence) -> Sequence {
        let mut frames = Vec::with_capacity(self.len() + other.len());
        frames.extend_from_slice(&self.frames);
        frames.extend_from_slice(&other.frames);
        Sequence::from(frames)
    }

    /// Frames in this sequence but not in `other`
    pub fn difference(&self, other: &Sequence) -> Sequence {
        let frames = self.iter().filter(|&frame| !other.contains(frame)).collect();
        Sequence::from_canonical(frames)
    }
}
