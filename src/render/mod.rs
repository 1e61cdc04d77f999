//! Graph visualization
//!
//! Rendering is decorative: renderers only read the graph and never feed
//! back into query results.

pub mod dot;

use crate::errors::Result;
use crate::graph::model::WordGraph;
use crate::graph::VertexId;
use crate::query::shortest_path::ShortestPath;
use rustc_hash::FxHashSet;

pub use dot::{render_dot, DotSnapshotWriter};

/// Directed edges to draw highlighted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: FxHashSet<(VertexId, VertexId)>,
}

impl EdgeSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Every edge along a path
    pub fn from_path(path: &ShortestPath) -> Self {
        let mut set = Self::new();
        set.extend_path(path);
        set
    }

    /// Add every edge along a path
    pub fn extend_path(&mut self, path: &ShortestPath) {
        self.edges.extend(path.edges());
    }

    /// Add one edge; false if it was already present
    pub fn insert(&mut self, from: VertexId, to: VertexId) -> bool {
        self.edges.insert((from, to))
    }

    /// Whether `from -> to` is highlighted
    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.edges.contains(&(from, to))
    }

    /// Number of highlighted edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Sink for graph snapshots
pub trait GraphRenderer {
    /// Render the graph, drawing `highlight` edges distinctly
    fn render(&mut self, graph: &WordGraph, highlight: Option<&EdgeSet>) -> Result<()>;
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl GraphRenderer for NoopRenderer {
    #[inline]
    fn render(&mut self, _graph: &WordGraph, _highlight: Option<&EdgeSet>) -> Result<()> {
        Ok(())
    }
}
