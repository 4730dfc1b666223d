//! Concurrency tests
//!
//! Concurrent searches against a statically populated index must return
//! exactly what a single-threaded search returns. Searches racing with
//! writers must never observe a half-indexed document.

use fts_core::{Document, Language};
use fts_search::Index;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa",
];

// ============================================================================
// Test Helpers
// ============================================================================

fn random_text(rng: &mut StdRng, max_words: usize) -> String {
    let count = rng.gen_range(0..max_words);
    (0..count)
        .map(|_| *WORDS.choose(rng).expect("non-empty word list"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn populated_index(seed: u64, docs: usize) -> Index {
    let mut rng = StdRng::seed_from_u64(seed);
    let index = Index::with_language(Language::English);
    for i in 0..docs {
        let text = random_text(&mut rng, 12);
        index.add(Document::new(format!("doc-{i}"), text).expect("valid document"));
    }
    index
}

fn random_queries(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let terms = rng.gen_range(1..4);
            (0..terms)
                .map(|_| *WORDS.choose(&mut rng).expect("non-empty word list"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn hit_ids(index: &Index, query: &str) -> Vec<String> {
    index
        .search(query)
        .into_iter()
        .map(|d| d.id.into_string())
        .collect()
}

// ============================================================================
// Static index
// ============================================================================

/// N concurrent readers agree with the single-threaded result
#[test]
fn test_concurrent_search_matches_sequential() {
    for round in 0..5u64 {
        let index = Arc::new(populated_index(round, 2_000));
        let queries = random_queries(round + 100, 64);

        let expected: Arc<HashMap<String, Vec<String>>> = Arc::new(
            queries
                .iter()
                .map(|q| (q.clone(), hit_ids(&index, q)))
                .collect(),
        );

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let index = Arc::clone(&index);
                let expected = Arc::clone(&expected);
                let mut queries = queries.clone();
                thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(round * 1_000 + t);
                    for _ in 0..4 {
                        queries.shuffle(&mut rng);
                        for q in &queries {
                            assert_eq!(&hit_ids(&index, q), &expected[q], "query {q:?}");
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("reader thread panicked");
        }
    }
}

// ============================================================================
// Readers racing a writer
// ============================================================================

/// Readers see a growing, fully indexed prefix of the writer's documents
#[test]
fn test_search_during_adds() {
    let index = Arc::new(Index::with_language(Language::English));
    let total = 1_000;

    let writer = {
        let index = Arc::clone(&index);
        thread::spawn(move || {
            for i in 0..total {
                index.add(
                    Document::new(format!("w-{i}"), "marker alpha bravo").expect("valid document"),
                );
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let mut seen = 0;
                while seen < total {
                    let hits = index.search("marker bravo");
                    assert!(hits.len() >= seen, "result set shrank");
                    for (i, hit) in hits.iter().enumerate() {
                        // Add order is preserved and every hit is complete
                        assert_eq!(hit.id.as_str(), format!("w-{i}"));
                        assert_eq!(hit.text, "marker alpha bravo");
                    }
                    seen = hits.len();
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }
    assert_eq!(index.len(), total);
}

/// Concurrent writers on disjoint identifiers lose nothing
#[test]
fn test_concurrent_writers() {
    let index = Arc::new(Index::with_language(Language::English));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for i in 0..500 {
                    let text = format!("shared writer{t}");
                    index.add(Document::new(format!("{t}-{i}"), text).expect("valid document"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer panicked");
    }

    assert_eq!(index.len(), 2_000);
    assert_eq!(index.search("shared").len(), 2_000);
    for t in 0..4 {
        assert_eq!(index.search(&format!("shared writer{t}")).len(), 500);
    }
}
