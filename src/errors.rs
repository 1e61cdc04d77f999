//! Error types for word_graph
//!
//! Every query outcome other than success is a recoverable, call-scoped
//! value of [`WordGraphError`]. None of them should abort the host process.

use std::fmt;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordGraphError>;

/// Which argument of a two-word query an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    First,
    Second,
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "word1"),
            Self::Second => write!(f, "word2"),
        }
    }
}

/// Main error type for word_graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordGraphError {
    /// The ingestion source could not be read
    #[error("Cannot read \"{path}\": {message}")]
    SourceUnreadable { path: String, message: String },

    /// A query word normalizes to the empty string
    #[error("Invalid {role}!")]
    InvalidWord { role: WordRole, input: String },

    /// A normalized query word has no matching vertex
    #[error("No \"{word}\" in the graph!")]
    UnknownVertex { role: WordRole, word: String },

    /// Both words exist but no vertex bridges them
    #[error("No bridge words from \"{from}\" to \"{to}\"!")]
    NoBridgeWords { from: String, to: String },

    /// The target is unreachable from the source
    #[error("No path from \"{from}\" to \"{to}\"!")]
    NoPath { from: String, to: String },

    /// The output collaborator failed to persist a result
    #[error("Cannot write \"{path}\": {message}")]
    Output { path: String, message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WordGraphError {
    /// Create a source-unreadable error
    pub fn source_unreadable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid word error
    pub fn invalid_word(role: WordRole, input: impl Into<String>) -> Self {
        Self::InvalidWord {
            role,
            input: input.into(),
        }
    }

    /// Create an unknown vertex error
    pub fn unknown_vertex(role: WordRole, word: impl Into<String>) -> Self {
        Self::UnknownVertex {
            role,
            word: word.into(),
        }
    }

    /// Create a no bridge words error
    pub fn no_bridge_words(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoBridgeWords {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a no path error
    pub fn no_path(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoPath {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an output error
    pub fn output(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error is a per-query outcome that leaves the graph usable
    ///
    /// Only configuration problems are treated as non-recoverable: the
    /// binary refuses to start with them.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidConfig { .. } | Self::Serialization { .. })
    }

    /// The argument this error refers to, if any
    pub fn role(&self) -> Option<WordRole> {
        match self {
            Self::InvalidWord { role, .. } | Self::UnknownVertex { role, .. } => Some(*role),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WordGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
