//! Bridge-word lookup
//!
//! `k` is a bridge from `a` to `b` when both `a -> k` and `k -> b` carry
//! positive weight. Weight magnitude is irrelevant to membership.

use crate::errors::{Result, WordGraphError, WordRole};
use crate::graph::model::WordGraph;
use crate::graph::VertexId;
use tracing::debug;

/// Pure bridge-word query over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct BridgeWordQuery<'g> {
    graph: &'g WordGraph,
}

impl<'g> BridgeWordQuery<'g> {
    /// Create a query over `graph`
    pub fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    /// Find the bridges between two words
    ///
    /// Words are matched ASCII case-insensitively, like the tokenizer. Results come back in vertex
    /// order, but callers should treat them as a set.
    pub fn find(&self, word1: &str, word2: &str) -> Result<Vec<VertexId>> {
        let word1 = word1.trim().to_ascii_lowercase();
        let word2 = word2.trim().to_ascii_lowercase();

        let v1 = self
            .graph
            .vertex_id(&word1)
            .ok_or_else(|| WordGraphError::unknown_vertex(WordRole::First, word1.as_str()))?;
        let v2 = self
            .graph
            .vertex_id(&word2)
            .ok_or_else(|| WordGraphError::unknown_vertex(WordRole::Second, word2.as_str()))?;

        let bridges = self.between(v1, v2);
        debug!(from = %word1, to = %word2, found = bridges.len(), "bridge lookup");
        if bridges.is_empty() {
            return Err(WordGraphError::no_bridge_words(word1, word2));
        }
        Ok(bridges)
    }

    /// Same as [`BridgeWordQuery::find`], resolved to words
    pub fn find_words(&self, word1: &str, word2: &str) -> Result<Vec<&'g str>> {
        let graph = self.graph;
        Ok(self
            .find(word1, word2)?
            .into_iter()
            .map(|id| graph.label(id))
            .collect())
    }

    /// Bridges between two vertices; empty when there are none
    pub fn between(&self, from: VertexId, to: VertexId) -> Vec<VertexId> {
        self.graph
            .successors(from)
            .map(|(k, _)| k)
            .filter(|&k| self.graph.has_edge(k, to))
            .collect()
    }
}
