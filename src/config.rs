//! Configuration for the frameseq runner

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How summaries are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum frames per chunk
    pub chunk_size: usize,
    /// End chunks early where a progression breaks
    pub enforce_progressions: bool,
    /// Number of frames to subsample, if any
    pub subsample: Option<usize>,
    /// Output format
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: 1,
            enforce_progressions: true,
            subsample: None,
            output: OutputFormat::Text,
        }
    }
}

/// Command-line values that take precedence over a loaded config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub chunk_size: Option<usize>,
    pub enforce_progressions: Option<bool>,
    pub subsample: Option<usize>,
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Apply overrides; unset fields keep the config's value
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(n) = overrides.chunk_size {
            self.chunk_size = n.max(1);
        }
        if let Some(enforce) = overrides.enforce_progressions {
            self.enforce_progressions = enforce;
        }
        if let Some(n) = overrides.subsample {
            self.subsample = Some(n);
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        self
    }

    /// Load a config from a JSON file. Missing fields use defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(json)?;
        config.chunk_size = config.chunk_size.max(1);
        Ok(config)
    }
}
