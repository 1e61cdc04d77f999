//! Weighted shortest paths (Dijkstra)
//!
//! Edge cost is the adjacency count, and a zero cell is "no edge", never a
//! free edge. The minimum-distance scan is a plain O(V²) pass so that ties
//! always go to the lowest vertex ID.

use crate::errors::{Result, WordGraphError, WordRole};
use crate::graph::model::WordGraph;
use crate::graph::VertexId;
use crate::nlp::tokenizer::Tokenizer;
use rayon::prelude::*;
use tracing::debug;

/// Vertex count at which all-targets path reconstruction fans out over the
/// rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// A reconstructed shortest path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Vertices from source to target, inclusive
    pub vertices: Vec<VertexId>,
    /// Sum of the traversed edge weights
    pub distance: u64,
}

impl ShortestPath {
    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the path has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive `(from, to)` pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Path words in order
    pub fn words<'g>(&self, graph: &'g WordGraph) -> Vec<&'g str> {
        self.vertices.iter().map(|&v| graph.label(v)).collect()
    }

    /// Render as `a->b->c`
    pub fn render(&self, graph: &WordGraph) -> String {
        self.words(graph).join("->")
    }
}

/// Outcome for one target of an all-targets query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    pub target: VertexId,
    pub result: Result<ShortestPath>,
}

/// Result of [`ShortestPathEngine::query`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathQuery {
    /// A single source/target pair
    Single(ShortestPath),
    /// Every other vertex, in ID order
    AllTargets {
        source: VertexId,
        paths: Vec<TargetPath>,
    },
}

/// Single-source Dijkstra output
#[derive(Debug, Clone)]
pub struct DistanceTable {
    source: VertexId,
    dist: Vec<u64>,
    pred: Vec<Option<VertexId>>,
}

impl DistanceTable {
    /// Vertex the table was computed from
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance to `target`, `None` when unreachable
    pub fn distance(&self, target: VertexId) -> Option<u64> {
        self.dist
            .get(target as usize)
            .copied()
            .filter(|&d| d != u64::MAX)
    }

    /// Walk predecessors back from `target`
    pub fn path_to(&self, target: VertexId) -> Option<ShortestPath> {
        let distance = self.distance(target)?;
        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.pred[current as usize]?;
            vertices.push(current);
        }
        vertices.reverse();
        Some(ShortestPath { vertices, distance })
    }
}

/// Shortest-path queries over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'g> {
    graph: &'g WordGraph,
    parallel_threshold: usize,
}

impl<'g> ShortestPathEngine<'g> {
    /// Create an engine with the default parallel threshold
    pub fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the vertex count from which all-targets queries run in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Dispatch on the second word: absent or empty after normalization
    /// means "every other vertex"
    pub fn query(&self, word1: &str, word2: Option<&str>) -> Result<PathQuery> {
        let target = word2.map(Tokenizer::normalize_word).unwrap_or_default();
        if target.is_empty() {
            let source = self.resolve_source(word1)?;
            let paths = self.paths_from(source);
            return Ok(PathQuery::AllTargets { source, paths });
        }
        self.shortest_path(word1, &target).map(PathQuery::Single)
    }

    /// Shortest path between two words
    pub fn shortest_path(&self, word1: &str, word2: &str) -> Result<ShortestPath> {
        let source = self.resolve_source(word1)?;
        let normalized = Tokenizer::normalize_word(word2);
        if normalized.is_empty() {
            return Err(WordGraphError::invalid_word(WordRole::Second, word2));
        }
        let target = self
            .graph
            .vertex_id(&normalized)
            .ok_or_else(|| WordGraphError::unknown_vertex(WordRole::Second, normalized))?;
        self.between(source, target)
    }

    /// Shortest paths from one word to every other vertex
    ///
    /// Unreachable targets are reported as individual `NoPath` entries.
    pub fn shortest_paths_from(&self, word1: &str) -> Result<Vec<TargetPath>> {
        let source = self.resolve_source(word1)?;
        Ok(self.paths_from(source))
    }

    /// Shortest path between two vertex IDs
    pub fn between(&self, source: VertexId, target: VertexId) -> Result<ShortestPath> {
        let table = self.distances_from(source);
        self.resolve_target(&table, target)
    }

    /// Run Dijkstra from `source`
    pub fn distances_from(&self, source: VertexId) -> DistanceTable {
        let n = self.graph.vertex_count();
        let mut dist = vec![u64::MAX; n];
        let mut pred = vec![None; n];
        let mut visited = vec![false; n];

        if (source as usize) < n {
            dist[source as usize] = 0;
        }

        loop {
            // Lowest ID wins ties
            let mut next: Option<usize> = None;
            for v in 0..n {
                if !visited[v] && dist[v] != u64::MAX && next.map_or(true, |u| dist[v] < dist[u]) {
                    next = Some(v);
                }
            }
            let Some(u) = next else { break };
            visited[u] = true;

            for (v, w) in self.graph.successors(u as VertexId) {
                let v = v as usize;
                let candidate = dist[u] + u64::from(w);
                if !visited[v] && candidate < dist[v] {
                    dist[v] = candidate;
                    pred[v] = Some(u as VertexId);
                }
            }
        }

        DistanceTable { source, dist, pred }
    }

    fn resolve_source(&self, word1: &str) -> Result<VertexId> {
        let normalized = Tokenizer::normalize_word(word1);
        if normalized.is_empty() {
            return Err(WordGraphError::invalid_word(WordRole::First, word1));
        }
        self.graph
            .vertex_id(&normalized)
            .ok_or_else(|| WordGraphError::unknown_vertex(WordRole::First, normalized))
    }

    fn resolve_target(&self, table: &DistanceTable, target: VertexId) -> Result<ShortestPath> {
        let source = table.source();
        let found = table.path_to(target);
        debug!(
            from = self.graph.word(source).unwrap_or_default(),
            to = self.graph.word(target).unwrap_or_default(),
            distance = found.as_ref().map(|p| p.distance),
            "shortest path"
        );
        found.ok_or_else(|| {
            WordGraphError::no_path(
                self.graph.word(source).unwrap_or_default(),
                self.graph.word(target).unwrap_or_default(),
            )
        })
    }

    /// One Dijkstra run, then a predecessor walk per target
    fn paths_from(&self, source: VertexId) -> Vec<TargetPath> {
        let table = self.distances_from(source);
        let targets: Vec<VertexId> = (0..self.graph.vertex_count() as VertexId)
            .filter(|&t| t != source)
            .collect();
        let solve = |target: VertexId| TargetPath {
            target,
            result: self.resolve_target(&table, target),
        };

        if self.graph.vertex_count() >= self.parallel_threshold {
            debug!(targets = targets.len(), "path reconstruction on rayon pool");
            targets.into_par_iter().map(solve).collect()
        } else {
            targets.into_iter().map(solve).collect()
        }
    }
}
