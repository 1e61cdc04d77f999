//! Immutable word graph
//!
//! A [`WordGraph`] stores its weights in a dense row-major matrix: row `i`
//! holds the outgoing weights of vertex `i`. A zero cell means "no edge".
//! Vocabularies are document-sized, so `n²` cells stay small.

use crate::document::read_document;
use crate::errors::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::VertexId;
use crate::nlp::tokenizer::Tokenizer;
use rustc_hash::FxHashMap;
use std::path::Path;
use tracing::info;

/// Directed, weighted word-adjacency graph
///
/// Read-only after construction. Queries borrow it immutably and it can be
/// shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGraph {
    words: Vec<String>,
    index: FxHashMap<String, VertexId>,
    weights: Vec<u32>,
    token_count: usize,
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::from_parts(Vec::new(), FxHashMap::default(), Vec::new(), 0)
    }
}

impl WordGraph {
    pub(crate) fn from_parts(
        words: Vec<String>,
        index: FxHashMap<String, VertexId>,
        weights: Vec<u32>,
        token_count: usize,
    ) -> Self {
        debug_assert_eq!(words.len() * words.len(), weights.len());
        debug_assert_eq!(words.len(), index.len());
        Self {
            words,
            index,
            weights,
            token_count,
        }
    }

    /// Build a graph from raw text with the default tokenizer
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, &Tokenizer::new())
    }

    /// Build a graph from raw text with a custom tokenizer
    pub fn from_text_with(text: &str, tokenizer: &Tokenizer) -> Self {
        let tokens = tokenizer.tokenize(text);
        let graph = GraphBuilder::from_tokens(&tokens).build();
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            tokens = graph.token_count(),
            "built word graph"
        );
        graph
    }

    /// Read a document and build its graph
    pub fn from_file(path: impl AsRef<Path>, tokenizer: &Tokenizer) -> Result<Self> {
        let text = read_document(path)?;
        Ok(Self::from_text_with(&text, tokenizer))
    }

    /// Number of distinct words
    pub fn vertex_count(&self) -> usize {
        self.words.len()
    }

    /// Check if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of tokens in the source stream
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Look up the vertex for an already-normalized word
    pub fn vertex_id(&self, word: &str) -> Option<VertexId> {
        self.index.get(word).copied()
    }

    /// Get the word for a vertex ID
    pub fn word(&self, id: VertexId) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    /// Word for an ID produced by this graph
    pub(crate) fn label(&self, id: VertexId) -> &str {
        &self.words[id as usize]
    }

    /// Weight of the directed edge `from -> to` (0 when absent)
    pub fn weight(&self, from: VertexId, to: VertexId) -> u32 {
        let n = self.words.len();
        let (from, to) = (from as usize, to as usize);
        if from >= n || to >= n {
            return 0;
        }
        self.weights[from * n + to]
    }

    /// Check whether `from -> to` has positive weight
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.weight(from, to) > 0
    }

    /// Outgoing weight row of a vertex, indexed by target ID
    pub fn row(&self, from: VertexId) -> &[u32] {
        let n = self.words.len();
        let from = from as usize;
        if from >= n {
            return &[];
        }
        &self.weights[from * n..(from + 1) * n]
    }

    /// Outgoing edges of a vertex in ascending target order
    pub fn successors(&self, from: VertexId) -> impl Iterator<Item = (VertexId, u32)> + '_ {
        self.row(from)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(to, &w)| (to as VertexId, w))
    }

    /// Iterate over all vertices in ID order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (i as VertexId, w.as_str()))
    }

    /// Iterate over all edges as `(from, to, weight)` in row-major order
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, u32)> + '_ {
        (0..self.vertex_count() as VertexId)
            .flat_map(move |from| self.successors(from).map(move |(to, w)| (from, to, w)))
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    /// Sum of all edge weights (the number of adjacent token pairs)
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }
}
