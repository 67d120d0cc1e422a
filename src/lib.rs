//! Frame sequences
//!
//! An ordered, duplicate-free set of integer frames together with the
//! compact notation used to describe render and animation frame ranges,
//! such as `1-10x2,20,30-33`.
//!
//! - `parser`: spec strings and range expansion into canonical frame lists
//! - `progression`: detection and partitioning of arithmetic progressions
//! - `spec`: rendering a frame list back into the shortest spec string
//! - `sequence`: the [`Sequence`] value with chunking, set operations,
//!   transforms and subsampling
//! - `summary` and `config`: reporting used by the `frameseq` runner
//!
//! ```
//! use frameseq::Sequence;
//!
//! let seq: Sequence = "1-10x3,20".parse().unwrap();
//! assert_eq!(seq.frames(), &[1, 4, 7, 10, 20]);
//! assert_eq!(seq.offset(1).to_string(), "2-11x3,21");
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod progression;
pub mod sequence;
pub mod spec;
pub mod summary;

pub use config::{Config, OutputFormat, Overrides};
pub use error::{Error, Result};
pub use sequence::{FrameInput, Sequence};
pub use summary::Summary;
