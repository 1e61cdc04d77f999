//! Letters-only tokenization
//!
//! Every character outside `a-z`/`A-Z` is a token separator, so digits,
//! punctuation and non-ASCII letters all split words ("word1x" yields
//! "word" and "x"). Tokens are lowercased.

/// A letters-only, lowercasing tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length to keep
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length.max(1);
        self
    }

    /// Split text into lowercase letter-only tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| word.len() >= self.min_token_length)
            .map(|word| word.to_ascii_lowercase())
            .collect()
    }

    /// Normalize a single query word
    ///
    /// Unlike [`Tokenizer::tokenize`], non-letters are dropped rather than
    /// treated as separators: "He11o!" becomes "heo", "@" becomes "".
    pub fn normalize_word(word: &str) -> String {
        word.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}
