//! Bridge-word text generation

use crate::graph::model::WordGraph;
use crate::nlp::tokenizer::Tokenizer;
use crate::query::bridge::BridgeWordQuery;
use rand::Rng;
use tracing::debug;

/// Rewrites sentences by inserting a random bridge word between each
/// adjacent pair of input words
///
/// The random source is injected so tests can seed it.
#[derive(Debug)]
pub struct TextGenerator<'g, R> {
    graph: &'g WordGraph,
    tokenizer: Tokenizer,
    rng: R,
}

impl<'g, R: Rng> TextGenerator<'g, R> {
    /// Create a generator with the default tokenizer
    pub fn new(graph: &'g WordGraph, rng: R) -> Self {
        Self {
            graph,
            tokenizer: Tokenizer::new(),
            rng,
        }
    }

    /// Tokenize input with `tokenizer`; pass the one the graph was built with
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Generate a new text from `input`
    ///
    /// Input words are normalized like the source document. Pairs with no
    /// bridge (including pairs with words absent from the graph) are left
    /// untouched.
    pub fn generate(&mut self, input: &str) -> String {
        let graph = self.graph;
        let words = self.tokenizer.tokenize(input);
        let bridges = BridgeWordQuery::new(graph);
        let mut output: Vec<&str> = Vec::with_capacity(words.len() * 2);
        let mut inserted = 0usize;

        for pair in words.windows(2) {
            output.push(&pair[0]);
            let (Some(from), Some(to)) = (graph.vertex_id(&pair[0]), graph.vertex_id(&pair[1])) else {
                continue;
            };
            let candidates = bridges.between(from, to);
            if candidates.is_empty() {
                continue;
            }
            let pick = candidates[self.rng.random_range(0..candidates.len())];
            output.push(graph.label(pick));
            inserted += 1;
        }
        if let Some(last) = words.last() {
            output.push(last);
        }

        debug!(input_words = words.len(), inserted, "generated text");
        output.join(" ")
    }
}
