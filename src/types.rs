//! Shared configuration types

use crate::errors::{Result, WordGraphError};
use crate::query::shortest_path::DEFAULT_PARALLEL_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for an interactive session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause between random-walk steps, in milliseconds
    pub step_delay_ms: u64,
    /// Where random-walk traces are written
    pub output_path: PathBuf,
    /// Directory for DOT snapshots (None = no rendering)
    pub snapshot_dir: Option<PathBuf>,
    /// Vertex count from which all-targets shortest paths run in parallel
    pub parallel_threshold: usize,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// Minimum token length kept by the tokenizer
    pub min_token_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 1000,
            output_path: PathBuf::from("output.txt"),
            snapshot_dir: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
            min_token_length: 1,
        }
    }
}

impl SessionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = crate::document::read_document(path)?;
        Self::from_json(&text)
    }

    /// Parse a config from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(WordGraphError::invalid_config(
                "parallel_threshold must be > 0",
            ));
        }

        if self.min_token_length == 0 {
            return Err(WordGraphError::invalid_config(
                "min_token_length must be > 0",
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(WordGraphError::invalid_config("output_path must not be empty"));
        }

        Ok(())
    }

    /// Pause between random-walk steps
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Builder: set the random-walk step delay
    pub fn with_step_delay_ms(mut self, delay_ms: u64) -> Self {
        self.step_delay_ms = delay_ms;
        self
    }

    /// Builder: set the walk output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Builder: enable DOT snapshots in a directory
    pub fn with_snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = Some(dir.into());
        self
    }

    /// Builder: set the parallel all-targets threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder: fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set the minimum token length
    pub fn with_min_token_length(mut self, len: usize) -> Self {
        self.min_token_length = len;
        self
    }
}
