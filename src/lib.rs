//! # word_graph
//!
//! Directed word-adjacency graphs built from plain text.
//!
//! Every distinct word of a document becomes a vertex; every time word `b`
//! directly follows word `a`, the weight of edge `a -> b` grows by one. The
//! finished [`WordGraph`] is read-only and answers four queries:
//!
//! - **Bridge words**: words `k` with `a -> k -> b` ([`BridgeWordQuery`])
//! - **Text generation**: insert a random bridge word between each pair of
//!   input words ([`TextGenerator`])
//! - **Shortest path**: weighted Dijkstra to one or all targets
//!   ([`ShortestPathEngine`])
//! - **Random walk**: follow unused edges until one would repeat
//!   ([`RandomWalker`])
//!
//! ```
//! use word_graph::{ShortestPathEngine, WordGraph};
//!
//! let graph = WordGraph::from_text("the car raced the car");
//! let path = ShortestPathEngine::new(&graph)
//!     .shortest_path("the", "raced")
//!     .unwrap();
//! assert_eq!(path.render(&graph), "the->car->raced");
//! ```

pub mod cli;
pub mod document;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod query;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, WordGraphError, WordRole};
pub use graph::{builder::GraphBuilder, model::WordGraph, VertexId};
pub use nlp::tokenizer::Tokenizer;
pub use query::{
    bridge::BridgeWordQuery,
    generate::TextGenerator,
    random_walk::{CancellationToken, RandomWalker, Walk, WalkState, WalkStop},
    shortest_path::{PathQuery, ShortestPath, ShortestPathEngine, TargetPath},
};
pub use render::{render_dot, DotSnapshotWriter, EdgeSet, GraphRenderer, NoopRenderer};
pub use types::SessionConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
