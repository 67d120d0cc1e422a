//! Frame sequence value type
//!
//! A [`Sequence`] owns a canonical frame list (strictly ascending, no
//! duplicates) and a chunk size used by [`Sequence::chunks`]. Frames never
//! change after construction: every set operation and transform returns a
//! new sequence.

mod algebra;
mod chunks;
mod subsample;
mod transform;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser;
use crate::progression;
use crate::spec;

/// Constructor input shapes
#[derive(Debug, Clone, PartialEq)]
pub enum FrameInput {
    /// No frames
    Empty,
    /// An inclusive range; reals are truncated toward zero
    Range {
        first: f64,
        last: Option<f64>,
        step: Option<f64>,
    },
    /// A spec string such as `1-10x2,20`
    Spec(String),
    /// Arbitrary frames; reals are truncated toward zero
    Frames(Vec<f64>),
}

/// An ordered, duplicate-free set of frames
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSequence")]
pub struct Sequence {
    frames: Vec<i64>,
    chunk_size: usize,
}

/// Unchecked wire form, canonicalized on the way in
#[derive(Deserialize)]
struct RawSequence {
    #[serde(default)]
    frames: Vec<i64>,
    #[serde(default = "default_chunk_size")]
    chunk_size: usize,
}

fn default_chunk_size() -> usize {
    1
}

impl From<RawSequence> for Sequence {
    fn from(raw: RawSequence) -> Self {
        Sequence::from(raw.frames).with_chunk_size(raw.chunk_size)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            chunk_size: 1,
        }
    }

    /// Wrap a list that is already sorted and unique
    fn from_canonical(frames: Vec<i64>) -> Self {
        debug_assert!(frames.windows(2).all(|w| w[0] < w[1]));
        Self {
            frames,
            chunk_size: 1,
        }
    }

    /// A sequence holding one frame
    pub fn single(frame: i64) -> Self {
        Self::from_canonical(vec![frame])
    }

    /// Every frame between `first` and `last` inclusive, in either order
    pub fn range(first: i64, last: i64) -> Self {
        Self::range_step(first, last, 1)
    }

    /// Every `step`-th frame from the lower bound up to the upper bound.
    /// Steps below 1 are treated as 1.
    pub fn range_step(first: i64, last: i64, step: i64) -> Self {
        Self::from_canonical(parser::expand_range(first, last, step))
    }

    /// Parse a spec string
    pub fn parse(spec: &str) -> Result<Self> {
        parser::parse_spec(spec).map(Self::from_canonical)
    }

    /// Build from any accepted input shape
    pub fn from_input(input: FrameInput) -> Result<Self> {
        match input {
            FrameInput::Empty => Ok(Self::new()),
            FrameInput::Range { first, last, step } => {
                let first = parser::truncate(first)?;
                let last = last.map(parser::truncate).transpose()?.unwrap_or(first);
                let step = step.map(parser::truncate).transpose()?.unwrap_or(1);
                Ok(Self::range_step(first, last, step))
            },
            FrameInput::Spec(spec) => Self::parse(&spec),
            FrameInput::Frames(values) => {
                let frames = values
                    .into_iter()
                    .map(parser::truncate)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::from(frames))
            },
        }
    }

    /// Set the chunk size, builder style
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.set_chunk_size(chunk_size);
        self
    }

    /// Set the chunk size used by [`Sequence::chunks`]. Clamped to at least 1.
    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = chunk_size.max(1);
    }

    /// Get the chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The canonical frame list
    pub fn frames(&self) -> &[i64] {
        &self.frames
    }

    /// Consume the sequence, returning its frames
    pub fn into_frames(self) -> Vec<i64> {
        self.frames
    }

    /// Iterate over frames in ascending order
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i64>> {
        self.frames.iter().copied()
    }

    /// Lowest frame, `None` when empty
    pub fn first(&self) -> Option<i64> {
        self.frames.first().copied()
    }

    /// Highest frame, `None` when empty
    pub fn last(&self) -> Option<i64> {
        self.frames.last().copied()
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the sequence has no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Check if a frame is present
    pub fn contains(&self, frame: i64) -> bool {
        self.frames.binary_search(&frame).is_ok()
    }

    /// Shortest spec string describing this sequence
    pub fn spec(&self) -> String {
        spec::serialize(&self.frames)
    }

    /// Whether all frames share one gap.
    ///
    /// Use [`progression::is_progression`] to test an arbitrary list.
    pub fn is_progression(&self) -> bool {
        progression::is_progression(&self.frames)
    }

    /// Gap between frames, `None` when this is not a progression
    pub fn step(&self) -> Option<i64> {
        progression::step(&self.frames)
    }

    /// Maximal runs of constant gap, each as its own sequence
    pub fn progressions(&self) -> Vec<Sequence> {
        progression::partition(&self.frames)
            .into_iter()
            .map(Self::from_canonical)
            .collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        spec::write_spec(f, &self.frames)
    }
}

impl FromStr for Sequence {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(frames: Vec<i64>) -> Self {
        Self::from_canonical(parser::canonicalize(frames))
    }
}

impl From<&[i64]> for Sequence {
    fn from(frames: &[i64]) -> Self {
        Self::from(frames.to_vec())
    }
}

impl FromIterator<i64> for Sequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = i64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
