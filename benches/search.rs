//! Search Performance Benchmarks
//!
//! Run with: cargo bench --bench search
//!
//! Labels:
//! - Layer (analyze_*, index_*, search_*)
//! - Access pattern (hot_query, uniform)
//! - Document count (small, medium, large datasets)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fts::{Analyzer, Document, Index, Language};
use std::time::Duration;

// ============================================================================
// Constants and Utilities
// ============================================================================

/// Fixed seed for reproducible benchmarks
const BENCH_SEED: u64 = 0xDEADBEEF_CAFEBABE;

const WORDS: &[&str] = &[
    "searchable",
    "content",
    "data",
    "test",
    "benchmark",
    "value",
    "important",
    "quick",
    "running",
    "foxes",
    "river",
    "forest",
];

/// Simple LCG for deterministic pseudo-random access patterns
fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state
}

fn random_text(state: &mut u64, max_words: usize) -> String {
    let count = (lcg_next(state) as usize) % max_words;
    (0..count)
        .map(|_| WORDS[(lcg_next(state) as usize) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Index with `count` random documents
fn populated_index(count: usize) -> Index {
    let index = Index::with_language(Language::English);
    let mut state = BENCH_SEED;
    for i in 0..count {
        let text = random_text(&mut state, 32);
        index.add(Document::new(format!("doc_{}", i), text).unwrap());
    }
    index
}

/// Pre-generate one- to three-term queries
fn pregenerate_queries(count: usize) -> Vec<String> {
    let mut state = BENCH_SEED ^ 0x5555;
    (0..count)
        .map(|_| {
            let terms = 1 + (lcg_next(&mut state) as usize) % 3;
            (0..terms)
                .map(|_| WORDS[(lcg_next(&mut state) as usize) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

// ============================================================================
// analyze - Text Pipeline
// ============================================================================

fn analyze_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    let english = Analyzer::new(Language::English);
    let text = "The quick brown foxes were running through the important forest data";
    group.bench_function("english_sentence", |b| b.iter(|| english.analyze(text)));

    let russian = Analyzer::new(Language::Russian);
    let text = "Рыжая лиса бежала через лес к реке перед закатом";
    group.bench_function("russian_sentence", |b| {
        b.iter(|| russian.analyze(text))
    });

    group.finish();
}

// ============================================================================
// index - Add
// ============================================================================

fn index_add_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    group.measurement_time(Duration::from_secs(5));

    // --- Benchmark: index/add ---
    // Semantic: Append one fresh document to a growing index
    group.bench_function("add", |b| {
        let index = Index::with_language(Language::English);
        let mut state = BENCH_SEED;
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            let text = random_text(&mut state, 32);
            index.add(Document::new(format!("doc_{}", i), text).unwrap());
        });
    });

    group.finish();
}

// ============================================================================
// search - Conjunctive Queries
// ============================================================================

fn search_by_dataset_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.measurement_time(Duration::from_secs(5));

    for doc_count in [1_000, 10_000, 100_000] {
        let label = match doc_count {
            1_000 => "small",
            10_000 => "medium",
            100_000 => "large",
            _ => "custom",
        };

        let index = populated_index(doc_count);
        group.throughput(Throughput::Elements(doc_count as u64));
        group.bench_with_input(BenchmarkId::new(label, doc_count), &index, |b, index| {
            b.iter(|| index.search("important data"))
        });
    }

    group.finish();
}

fn search_by_access_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.measurement_time(Duration::from_secs(5));

    let index = populated_index(10_000);

    // --- Benchmark: search/hot_query ---
    group.bench_function("hot_query", |b| {
        b.iter(|| index.search("quick foxes"));
    });

    // --- Benchmark: search/uniform ---
    group.bench_function("uniform", |b| {
        let queries = pregenerate_queries(100);
        let mut rng_state = BENCH_SEED;
        b.iter(|| {
            let idx = (lcg_next(&mut rng_state) as usize) % queries.len();
            index.search(&queries[idx])
        });
    });

    group.finish();
}

criterion_group!(analyze_benches, analyze_benchmarks);
criterion_group!(index_benches, index_add_benchmarks);
criterion_group!(
    search_benches,
    search_by_dataset_size,
    search_by_access_pattern
);
criterion_main!(analyze_benches, index_benches, search_benches);
