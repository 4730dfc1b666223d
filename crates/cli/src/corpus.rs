//! Synthetic corpus used to warm up the index.
//!
//! Documents get a UUID v4 id and a random run of words drawn from a word
//! list. With a fixed seed both ids and texts are reproducible.

use std::path::Path;
use std::time::Instant;

use fts_core::{Document, Result, WarmupConfig};
use fts_search::Index;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Built-in word list used when no `warmup.word_list` is configured.
const BUILTIN_WORDS: &[&str] = &[
    "дом", "книга", "лиса", "собака", "кошка", "река", "лес", "город", "дорога", "окно", "стол",
    "письмо", "работа", "время", "человек", "друг", "солнце", "вода", "земля", "небо", "море",
    "поле", "гора", "ветер", "снег", "дождь", "утро", "вечер", "ночь", "день", "год", "слово",
    "рыжая", "серая", "большой", "маленький", "быстрый", "тихий", "старый", "новый", "бежать",
    "читать", "писать", "думать", "смотреть", "слушать", "говорить", "жить", "на", "в", "под",
    "через", "для", "без", "о", "у", "за", "над", "перед", "при", "про", "от",
];

/// Load a word list: one word per line, lowercased, blank lines skipped.
///
/// Falls back to the built-in list when `path` is `None`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read and `InvalidInput` if it
/// contains no words.
pub fn load_words(path: Option<&Path>) -> Result<Vec<String>> {
    let words: Vec<String> = match path {
        None => BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        Some(path) => std::fs::read_to_string(path)?
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_lowercase)
            .collect(),
    };
    if words.is_empty() {
        return Err(fts_core::Error::invalid_input("word list is empty"));
    }
    Ok(words)
}

/// Random document generator
pub struct CorpusGenerator {
    words: Vec<String>,
    max_words: usize,
    rng: StdRng,
}

impl CorpusGenerator {
    /// Create a generator; `seed` of `None` seeds from entropy.
    pub fn new(words: Vec<String>, max_words: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        CorpusGenerator {
            words,
            max_words,
            rng,
        }
    }

    /// Up to `max_words - 1` random words joined by spaces.
    pub fn next_text(&mut self) -> String {
        let count = if self.max_words == 0 {
            0
        } else {
            self.rng.gen_range(0..self.max_words)
        };
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(word) = self.words.choose(&mut self.rng) {
                out.push(word.as_str());
            }
        }
        out.join(" ")
    }

    /// Next document with a random UUID v4 id.
    pub fn next_document(&mut self) -> Result<Document> {
        let id = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();
        let text = self.next_text();
        Document::new(id.to_string(), text)
    }
}

/// Fill `index` with `config.documents` generated documents.
///
/// A `progress_every` of zero logs every document.
pub fn warm_up(
    index: &Index,
    generator: &mut CorpusGenerator,
    config: &WarmupConfig,
) -> Result<()> {
    let total = config.documents;
    let progress_every = config.progress_every.max(1);
    let started = Instant::now();
    for i in 0..total {
        if i % progress_every == 0 {
            info!(target: "fts::cli", "saturation document index {}/{}", i, total);
        }
        index.add(generator.next_document()?);
    }

    let stats = index.stats();
    info!(
        target: "fts::cli",
        documents = stats.documents,
        terms = stats.terms,
        postings = stats.postings,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Warm-up complete"
    );
    Ok(())
}
