//! Word-adjacency graph construction and storage

pub mod builder;
pub mod model;

/// Stable vertex index, assigned in order of first occurrence
pub type VertexId = u32;
