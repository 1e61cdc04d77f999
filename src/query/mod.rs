//! Read-only queries over a built [`WordGraph`](crate::graph::model::WordGraph)
//!
//! | Query | Type | Randomness |
//! |-------|------|------------|
//! | Bridge words | [`bridge::BridgeWordQuery`] | none |
//! | Text generation | [`generate::TextGenerator`] | injected `Rng` picks among bridges |
//! | Shortest path | [`shortest_path::ShortestPathEngine`] | none |
//! | Random walk | [`random_walk::RandomWalker`] | injected `Rng` picks the start |

pub mod bridge;
pub mod generate;
pub mod random_walk;
pub mod shortest_path;
