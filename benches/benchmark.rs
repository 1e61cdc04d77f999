//! Benchmarks for word_graph

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use word_graph::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.
"#;

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenizer.tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let tokens = Tokenizer::new().tokenize(SAMPLE_TEXT);

    c.bench_function("graph_build", |b| {
        b.iter(|| GraphBuilder::from_tokens(black_box(&tokens)).build())
    });
}

fn benchmark_queries(c: &mut Criterion) {
    let graph = WordGraph::from_text(SAMPLE_TEXT);
    let engine = ShortestPathEngine::new(&graph);

    c.bench_function("shortest_path_single", |b| {
        b.iter(|| engine.shortest_path(black_box("machine"), black_box("design")))
    });

    let mut group = c.benchmark_group("shortest_path_all_targets");
    for threshold in [1usize, usize::MAX] {
        let engine = ShortestPathEngine::new(&graph).with_parallel_threshold(threshold);
        let label = if threshold == 1 { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| engine.shortest_paths_from(black_box("machine")))
        });
    }
    group.finish();

    c.bench_function("bridge_words", |b| {
        let query = BridgeWordQuery::new(&graph);
        b.iter(|| query.find(black_box("machine"), black_box("is")))
    });

    c.bench_function("generate_text", |b| {
        let mut generator = TextGenerator::new(&graph, StdRng::seed_from_u64(7));
        b.iter(|| generator.generate(black_box("machine is a subset of deep networks")))
    });

    c.bench_function("random_walk", |b| {
        let mut walker = RandomWalker::new(&graph, StdRng::seed_from_u64(7));
        let token = CancellationToken::new();
        b.iter(|| walker.walk(&token))
    });
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_queries
);
criterion_main!(benches);
