//! Random walks that stop on the first repeated edge
//!
//! Only the start vertex is random. From there the walk always takes the
//! lowest-ID outgoing edge it has not used yet, and stops when none is left
//! or when its [`CancellationToken`] fires. Each edge is used at most once,
//! so a walk takes at most `edge_count` steps.

use crate::graph::model::WordGraph;
use crate::graph::VertexId;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

/// Cooperative stop signal shared between a walk and its controller
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not yet cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop; honoured at the next step boundary
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether a stop was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Why a walk ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStop {
    /// No unused outgoing edge from the current vertex
    DeadEnd,
    /// The cancellation token fired
    Cancelled,
}

/// A finished walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    /// Visited vertices in order, start vertex first
    pub vertices: Vec<VertexId>,
    pub stop: WalkStop,
}

impl Walk {
    /// Number of edges traversed
    pub fn steps(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Visited words in order
    pub fn words<'g>(&self, graph: &'g WordGraph) -> Vec<&'g str> {
        self.vertices.iter().map(|&v| graph.label(v)).collect()
    }

    /// Space-joined words
    pub fn render(&self, graph: &WordGraph) -> String {
        self.words(graph).join(" ")
    }
}

/// In-progress walk; advance it with [`WalkState::step`]
#[derive(Debug, Clone)]
pub struct WalkState<'g> {
    graph: &'g WordGraph,
    used: Vec<bool>,
    path: Vec<VertexId>,
    finished: bool,
}

impl<'g> WalkState<'g> {
    /// Start a walk at a fixed vertex
    pub fn from_vertex(graph: &'g WordGraph, start: VertexId) -> Self {
        let n = graph.vertex_count();
        let valid = (start as usize) < n;
        Self {
            graph,
            used: vec![false; n * n],
            path: if valid { vec![start] } else { Vec::new() },
            finished: !valid,
        }
    }

    /// Take the next unused outgoing edge
    ///
    /// Returns the vertex moved to, or `None` once the walk is at a dead end.
    pub fn step(&mut self) -> Option<VertexId> {
        if self.finished {
            return None;
        }
        let current = *self.path.last()?;
        let n = self.graph.vertex_count();
        let row = current as usize * n;

        let next = self
            .graph
            .successors(current)
            .map(|(to, _)| to)
            .find(|&to| !self.used[row + to as usize]);

        match next {
            Some(to) => {
                self.used[row + to as usize] = true;
                self.path.push(to);
                trace!(from = current, to, "walk step");
                Some(to)
            }
            None => {
                self.finished = true;
                None
            }
        }
    }

    /// Vertices visited so far
    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current path as space-joined words
    pub fn render(&self) -> String {
        self.path
            .iter()
            .map(|&v| self.graph.label(v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn into_walk(self, stop: WalkStop) -> Walk {
        Walk {
            vertices: self.path,
            stop,
        }
    }
}

/// Runs paced, cancellable random walks over a borrowed graph
#[derive(Debug)]
pub struct RandomWalker<'g, R> {
    graph: &'g WordGraph,
    rng: R,
    step_delay: Duration,
}

impl<'g, R: Rng> RandomWalker<'g, R> {
    /// Create a walker with no step delay
    pub fn new(graph: &'g WordGraph, rng: R) -> Self {
        Self {
            graph,
            rng,
            step_delay: Duration::ZERO,
        }
    }

    /// Pause between steps so progress can be watched
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Begin a walk at a uniformly chosen vertex
    ///
    /// On an empty graph the returned state is already finished.
    pub fn start(&mut self) -> WalkState<'g> {
        let n = self.graph.vertex_count();
        if n == 0 {
            return WalkState::from_vertex(self.graph, 0);
        }
        let start = self.rng.random_range(0..n) as VertexId;
        WalkState::from_vertex(self.graph, start)
    }

    /// Walk until a dead end or cancellation
    pub fn walk(&mut self, cancel: &CancellationToken) -> Walk {
        self.walk_with(cancel, |_| {})
    }

    /// Walk and report every intermediate state
    ///
    /// `on_step` sees the start vertex first and then each extension of the
    /// path. The token is checked before every step.
    pub fn walk_with<F>(&mut self, cancel: &CancellationToken, mut on_step: F) -> Walk
    where
        F: FnMut(&WalkState<'g>),
    {
        let mut state = self.start();
        if !state.path().is_empty() {
            on_step(&state);
        }

        let stop = loop {
            if cancel.is_cancelled() {
                break WalkStop::Cancelled;
            }
            if state.step().is_none() {
                break WalkStop::DeadEnd;
            }
            on_step(&state);
            if !self.step_delay.is_zero() {
                thread::sleep(self.step_delay);
            }
        };

        debug!(steps = state.path().len().saturating_sub(1), ?stop, "walk finished");
        state.into_walk(stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cycle_stops_on_repeated_edge() {
        // a->b->c->a, then a->b would repeat
        let graph = WordGraph::from_text("a b c a");
        let mut state = WalkState::from_vertex(&graph, 0);

        while state.step().is_some() {}
        let words: Vec<_> = state.path().iter().map(|&v| graph.label(v)).collect();

        assert_eq!(words, vec!["a", "b", "c", "a"]);
        assert!(state.is_finished());
    }

    #[test]
    fn test_prefers_lowest_unused_edge() {
        // x has edges to a (id 1) and b (id 2); second visit to x takes b
        let graph = WordGraph::from_text("x a x b");
        let mut state = WalkState::from_vertex(&graph, 0);

        while state.step().is_some() {}
        assert_eq!(state.render(), "x a x b");
    }

    #[test]
    fn test_dead_end() {
        let graph = WordGraph::from_text("one two");
        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(3));
        let walk = walker.walk(&CancellationToken::new());

        assert_eq!(walk.stop, WalkStop::DeadEnd);
        assert!(walk.vertices.len() <= 2);
    }

    #[test]
    fn test_single_vertex_without_loop() {
        let graph = WordGraph::from_text("alone");
        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(0));
        let walk = walker.walk(&CancellationToken::new());

        assert_eq!(walk.render(&graph), "alone");
        assert_eq!(walk.steps(), 0);
    }

    #[test]
    fn test_self_loop_used_once() {
        let graph = WordGraph::from_text("go go");
        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(0));
        let walk = walker.walk(&CancellationToken::new());

        assert_eq!(walk.render(&graph), "go go");
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::default();
        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(0));
        let walk = walker.walk(&CancellationToken::new());

        assert!(walk.vertices.is_empty());
        assert_eq!(walk.stop, WalkStop::DeadEnd);
    }

    #[test]
    fn test_cancel_before_first_step() {
        let graph = WordGraph::from_text("a b c d e f a");
        let token = CancellationToken::new();
        token.cancel();

        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(9));
        let walk = walker.walk(&token);

        assert_eq!(walk.stop, WalkStop::Cancelled);
        assert_eq!(walk.vertices.len(), 1);
    }

    #[test]
    fn test_cancel_from_progress_callback() {
        let graph = WordGraph::from_text("a b c d e f a");
        let token = CancellationToken::new();
        let observer = token.clone();

        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(9));
        let mut reports = Vec::new();
        let walk = walker.walk_with(&token, |state| {
            reports.push(state.path().len());
            if state.path().len() == 3 {
                observer.cancel();
            }
        });

        assert_eq!(walk.stop, WalkStop::Cancelled);
        assert_eq!(walk.vertices.len(), 3);
        assert_eq!(reports, vec![1, 2, 3]);
    }

    #[test]
    fn test_seeded_walks_repeat() {
        let graph = WordGraph::from_text("the quick fox saw the lazy dog and the quick cat");
        let run = |seed| {
            RandomWalker::new(&graph, StdRng::seed_from_u64(seed)).walk(&CancellationToken::new())
        };

        assert_eq!(run(11), run(11));
    }
}
