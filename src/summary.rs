//! Deterministic sequence summaries
//!
//! A summary captures everything the runner reports about a sequence in a
//! serializable form. The same input and config always produce the same
//! summary.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sequence::Sequence;

/// Serializable report of a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Shortest spec string
    pub spec: String,
    /// Number of frames
    pub length: usize,
    pub first: Option<i64>,
    pub last: Option<i64>,
    /// Gap, when the whole sequence is one progression
    pub step: Option<i64>,
    /// Spec of each maximal progression
    pub progressions: Vec<String>,
    /// Chunk size used for `chunks`
    pub chunk_size: usize,
    /// Spec of each chunk
    pub chunks: Vec<String>,
    /// Spec of the subsampled frames, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsample: Option<String>,
}

impl Summary {
    /// Summarize a sequence using the chunking options in `config`
    pub fn from_sequence(sequence: &Sequence, config: &Config) -> Self {
        let chunked = sequence.clone().with_chunk_size(config.chunk_size);
        Self {
            spec: sequence.spec(),
            length: sequence.len(),
            first: sequence.first(),
            last: sequence.last(),
            step: sequence.step(),
            progressions: sequence.progressions().iter().map(Sequence::spec).collect(),
            chunk_size: chunked.chunk_size(),
            chunks: chunked
                .chunks(config.enforce_progressions)
                .iter()
                .map(Sequence::spec)
                .collect(),
            subsample: config.subsample.map(|count| sequence.subsample(count).spec()),
        }
    }

    /// Convert to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Human readable report
    pub fn to_text(&self) -> String {
        let show = |value: Option<i64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

        let mut lines = vec![
            format!("spec:         {}", self.spec),
            format!("length:       {}", self.length),
            format!("first:        {}", show(self.first)),
            format!("last:         {}", show(self.last)),
            format!("step:         {}", show(self.step)),
            format!("progressions: {}", self.progressions.join(" ")),
            format!("chunks ({}):   {}", self.chunk_size, self.chunks.join(" ")),
        ];
        if let Some(subsample) = &self.subsample {
            lines.push(format!("subsample:    {}", subsample));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_sequence() {
        let seq = Sequence::from(vec![1, 2, 3, 5, 6, 7, 8, 10, 11, 12]);
        let config = Config {
            chunk_size: 5,
            ..Config::default()
        };
        let summary = Summary::from_sequence(&seq, &config);
        assert_eq!(summary.spec, "1-3,5-8,10-12");
        assert_eq!(summary.length, 10);
        assert_eq!(summary.first, Some(1));
        assert_eq!(summary.last, Some(12));
        assert_eq!(summary.step, None);
        assert_eq!(summary.progressions, vec!["1-3", "5-8", "10-12"]);
        assert_eq!(summary.chunks, vec!["1-3", "5-8", "10-12"]);
        assert_eq!(summary.subsample, None);
    }

    #[test]
    fn test_summary_subsample() {
        let seq = Sequence::range(1, 10);
        let config = Config {
            subsample: Some(3),
            ..Config::default()
        };
        let summary = Summary::from_sequence(&seq, &config);
        assert_eq!(summary.subsample.as_deref(), Some("2-6x4,9"));
        assert_eq!(summary.step, Some(1));
    }

    #[test]
    fn test_summary_json_roundtrip() {
        let summary = Summary::from_sequence(&Sequence::range_step(0, 12, 4), &Config::default());
        let json = summary.to_json().unwrap();
        assert_eq!(Summary::from_json(&json).unwrap(), summary);
    }

    #[test]
    fn test_summary_to_text() {
        let summary = Summary::from_sequence(&Sequence::new(), &Config::default());
        let text = summary.to_text();
        assert!(text.contains("length:       0"));
        assert!(text.contains("first:        -"));
        assert!(!text.contains("subsample"));
    }
}
