//! Command line argument parsing using clap.

use crate::errors::Result;
use crate::types::SessionConfig;
use clap::Parser;
use std::path::PathBuf;

/// word-graph - explore the word-adjacency graph of a text document
#[derive(Parser, Debug, Clone)]
#[command(name = "word-graph")]
#[command(about = "Build a directed word graph from a text file and query it interactively")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordGraphArgs {
    /// Text document to build the graph from
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Session configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Where to write random-walk traces
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory for numbered DOT snapshots of the graph
    #[arg(long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,

    /// Pause between random-walk steps
    #[arg(long, value_name = "MS")]
    pub step_delay_ms: Option<u64>,

    /// Seed the random source for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbosity level (repeat for more: -v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl WordGraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Default log filter when `WORD_GRAPH_LOG` is unset
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity() {
            0 => "word_graph=error",
            1 => "word_graph=warn",
            2 => "word_graph=info",
            3 => "word_graph=debug",
            _ => "word_graph=trace",
        }
    }

    /// Merge the config file (if any) with flag overrides
    pub fn resolve_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_json_file(path)?,
            None => SessionConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(dir) = &self.snapshots {
            config.snapshot_dir = Some(dir.clone());
        }
        if let Some(delay) = self.step_delay_ms {
            config.step_delay_ms = delay;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }
}
