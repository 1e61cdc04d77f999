//! Graph builder with efficient edge handling
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) vertex and edge lookups during construction. Once the token
//! stream is consumed, [`GraphBuilder::build`] freezes it into a
//! [`WordGraph`].

use crate::graph::model::WordGraph;
use crate::graph::VertexId;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The word for this node
    pub word: String,
    /// Outgoing adjacency: target node ID -> occurrence count
    pub edges: FxHashMap<VertexId, u32>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable builder for directed word-adjacency graphs
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps word -> node ID
    word_to_id: FxHashMap<String, VertexId>,
    /// Node storage, indexed by ID
    nodes: Vec<BuilderNode>,
    /// Last token pushed through [`GraphBuilder::push_token`]
    previous: Option<VertexId>,
    /// Number of tokens consumed
    token_count: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            word_to_id: FxHashMap::default(),
            nodes: Vec::new(),
            previous: None,
            token_count: 0,
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
            previous: None,
            token_count: 0,
        }
    }

    /// Get or create a node for the given word, returning its ID
    ///
    /// IDs are handed out in order of first occurrence.
    pub fn get_or_create_node(&mut self, word: &str) -> VertexId {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as VertexId;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(BuilderNode::new(word));
        id
    }

    /// Increment the directed edge weight `from -> to` by one
    ///
    /// Self-loops are kept: "go go" is a `go -> go` edge.
    pub fn increment_edge(&mut self, from: VertexId, to: VertexId) {
        if (to as usize) >= self.nodes.len() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0) += 1;
        }
    }

    /// Feed one token of the stream
    ///
    /// Creates the vertex if needed and links it from the previously pushed
    /// token.
    pub fn push_token(&mut self, word: &str) -> VertexId {
        let id = self.get_or_create_node(word);
        if let Some(prev) = self.previous {
            self.increment_edge(prev, id);
        }
        self.previous = Some(id);
        self.token_count += 1;
        id
    }

    /// Build a graph from a token stream
    ///
    /// Every consecutive pair `(a, b)` adds one to the weight of `a -> b`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut builder = Self::with_capacity(tokens.len() / 2);
        for token in tokens {
            builder.push_token(token.as_ref());
        }
        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Get the number of tokens consumed so far
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Get a node by ID
    pub fn get_node(&self, id: VertexId) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word
    pub fn get_node_id(&self, word: &str) -> Option<VertexId> {
        self.word_to_id.get(word).copied()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the builder into an immutable [`WordGraph`]
    pub fn build(self) -> WordGraph {
        let n = self.nodes.len();
        let mut weights = vec![0u32; n * n];
        let mut words = Vec::with_capacity(n);

        for (from, node) in self.nodes.into_iter().enumerate() {
            for (to, count) in node.edges {
                weights[from * n + to as usize] = count;
            }
            words.push(node.word);
        }

        debug!(
            vertices = n,
            tokens = self.token_count,
            "materialized adjacency matrix"
        );
        WordGraph::from_parts(words, self.word_to_id, weights, self.token_count)
    }
}
