//! Graphviz DOT output

use crate::document::write_output;
use crate::errors::Result;
use crate::graph::model::WordGraph;
use crate::render::{EdgeSet, GraphRenderer};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render a graph as a DOT digraph
///
/// Nodes are labelled with their word and edges with their weight.
/// Highlighted edges are drawn red and bold.
pub fn render_dot(graph: &WordGraph, highlight: Option<&EdgeSet>) -> String {
    let mut out = String::with_capacity(64 + graph.edge_count() * 32);
    out.push_str("digraph word_graph {\n");
    out.push_str("    node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for (id, word) in graph.vertices() {
        let _ = writeln!(out, "    n{id} [label=\"{}\"];", escape(word));
    }
    for (from, to, weight) in graph.edges() {
        let marked = highlight.is_some_and(|h| h.contains(from, to));
        if marked {
            let _ = writeln!(
                out,
                "    n{from} -> n{to} [label=\"{weight}\", color=red, penwidth=2.5];"
            );
        } else {
            let _ = writeln!(out, "    n{from} -> n{to} [label=\"{weight}\"];");
        }
    }

    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes numbered `graph_<n>.dot` snapshots into a directory
#[derive(Debug, Clone)]
pub struct DotSnapshotWriter {
    dir: PathBuf,
    next: usize,
}

impl DotSnapshotWriter {
    /// Write snapshots into `dir`, starting at `graph_0.dot`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next: 0,
        }
    }

    /// Snapshot directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the next snapshot will be written to
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("graph_{}.dot", self.next))
    }
}

impl GraphRenderer for DotSnapshotWriter {
    fn render(&mut self, graph: &WordGraph, highlight: Option<&EdgeSet>) -> Result<()> {
        let path = self.next_path();
        write_output(&path, &render_dot(graph, highlight))?;
        self.next += 1;
        info!(path = %path.display(), "wrote graph snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::shortest_path::ShortestPathEngine;
    use tempfile::tempdir;

    #[test]
    fn test_render_plain() {
        let graph = WordGraph::from_text("the car raced the car");
        let dot = render_dot(&graph, None);

        assert!(dot.starts_with("digraph word_graph {"));
        assert!(dot.contains("n0 [label=\"the\"];"));
        assert!(dot.contains("n0 -> n1 [label=\"2\"];"));
        assert!(!dot.contains("color=red"));
    }

    #[test]
    fn test_render_highlighted_path() {
        let graph = WordGraph::from_text("the car raced the car");
        let path = ShortestPathEngine::new(&graph)
            .shortest_path("the", "raced")
            .unwrap();
        let dot = render_dot(&graph, Some(&EdgeSet::from_path(&path)));

        assert_eq!(dot.matches("color=red").count(), 2);
        assert!(dot.contains("n2 -> n0 [label=\"1\"];"));
    }

    #[test]
    fn test_snapshots_are_numbered() {
        let dir = tempdir().unwrap();
        let graph = WordGraph::from_text("a b");
        let mut writer = DotSnapshotWriter::new(dir.path());

        writer.render(&graph, None).unwrap();
        writer.render(&graph, None).unwrap();

        assert!(dir.path().join("graph_0.dot").exists());
        assert!(dir.path().join("graph_1.dot").exists());
        assert_eq!(writer.next_path(), dir.path().join("graph_2.dot"));
    }
}
