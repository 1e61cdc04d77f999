//! Property-based tests using proptest

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use word_graph::*;

/// Token streams over a small vocabulary so edges repeat and cycles form
fn small_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]), 0..max_len)
        .prop_map(|words| words.join(" "))
}

/// Minimum path weight by enumerating every simple path
fn brute_force_distance(graph: &WordGraph, from: VertexId, to: VertexId) -> Option<u64> {
    fn dfs(
        graph: &WordGraph,
        current: VertexId,
        to: VertexId,
        seen: &mut [bool],
        acc: u64,
        best: &mut Option<u64>,
    ) {
        if current == to {
            *best = Some(best.map_or(acc, |b| b.min(acc)));
            return;
        }
        for (next, w) in graph.successors(current) {
            if !seen[next as usize] {
                seen[next as usize] = true;
                dfs(graph, next, to, seen, acc + u64::from(w), best);
                seen[next as usize] = false;
            }
        }
    }

    let mut seen = vec![false; graph.vertex_count()];
    seen[from as usize] = true;
    let mut best = None;
    dfs(graph, from, to, &mut seen, 0, &mut best);
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_build_deterministic(text in small_text(40)) {
        let first = WordGraph::from_text(&text);
        let second = WordGraph::from_text(&text);
        prop_assert_eq!(&first, &second);

        // weights count adjacent pairs exactly
        let expected = first.token_count().saturating_sub(1) as u64;
        prop_assert_eq!(first.total_weight(), expected);
    }

    #[test]
    fn test_tokens_are_lowercase_letters(text in "\\PC{0,80}") {
        for token in Tokenizer::new().tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_bridge_membership(text in small_text(40)) {
        let graph = WordGraph::from_text(&text);
        let query = BridgeWordQuery::new(&graph);

        for (x, _) in graph.vertices() {
            for (y, _) in graph.vertices() {
                let found = query.between(x, y);
                for (k, _) in graph.vertices() {
                    let is_bridge = graph.weight(x, k) > 0 && graph.weight(k, y) > 0;
                    prop_assert_eq!(found.contains(&k), is_bridge);
                }
            }
        }
    }

    #[test]
    fn test_dijkstra_matches_brute_force(text in small_text(30)) {
        let graph = WordGraph::from_text(&text);
        let engine = ShortestPathEngine::new(&graph);

        for (from, _) in graph.vertices() {
            for (to, _) in graph.vertices() {
                let expected = brute_force_distance(&graph, from, to);
                match engine.between(from, to) {
                    Ok(path) => {
                        prop_assert_eq!(Some(path.distance), expected);
                        prop_assert_eq!(path.vertices.first(), Some(&from));
                        prop_assert_eq!(path.vertices.last(), Some(&to));

                        let mut sum = 0u64;
                        for (a, b) in path.edges() {
                            prop_assert!(graph.weight(a, b) > 0);
                            sum += u64::from(graph.weight(a, b));
                        }
                        prop_assert_eq!(sum, path.distance);
                    }
                    Err(err) => {
                        prop_assert!(
                            matches!(err, WordGraphError::NoPath { .. }),
                            "unexpected error kind"
                        );
                        prop_assert_eq!(expected, None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_walk_terminates_without_repeating(text in small_text(60), seed in 0u64..1000) {
        let graph = WordGraph::from_text(&text);
        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(seed));
        let walk = walker.walk(&CancellationToken::new());

        let n = graph.vertex_count();
        prop_assert!(walk.steps() <= n * n);
        prop_assert!(walk.steps() <= graph.edge_count());
        prop_assert_eq!(walk.stop, WalkStop::DeadEnd);

        let mut used = std::collections::HashSet::new();
        for pair in walk.vertices.windows(2) {
            prop_assert!(graph.has_edge(pair[0], pair[1]));
            prop_assert!(used.insert((pair[0], pair[1])), "edge repeated");
        }
    }

    #[test]
    fn test_generated_text_keeps_input_order(
        source in small_text(40),
        input in small_text(10),
        seed in 0u64..1000
    ) {
        let graph = WordGraph::from_text(&source);
        let mut generator = TextGenerator::new(&graph, StdRng::seed_from_u64(seed));
        let output = generator.generate(&input);

        // the input words appear, in order, as a subsequence of the output
        let mut out_words = output.split_whitespace();
        for word in input.split_whitespace() {
            prop_assert!(out_words.any(|w| w == word));
        }
    }
}
