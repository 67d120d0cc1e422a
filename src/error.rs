//! Error types for frame sequence operations

use std::io;
use thiserror::Error;

/// Frame sequence error type
#[derive(Error, Debug)]
pub enum Error {
    /// A spec token did not match `first(-last(xstep)?)?`
    #[error("invalid frame token {token:?}: provide a valid set of frames, e.g. 1, 2-5, 10-20x2")]
    InvalidSpec { token: String },

    /// A real-valued frame could not be truncated to an integer
    #[error("frame value is not finite: {0}")]
    NonFinite(f64),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file could not be decoded
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_spec(token: &str) -> Self {
        Error::InvalidSpec {
            token: token.to_string(),
        }
    }
}

/// Result type for frame sequence operations
pub type Result<T> = std::result::Result<T, Error>;
