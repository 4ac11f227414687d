//! Word scoring and recommendation
//!
//! The engine does not decide what makes a good guess. It takes any
//! [`Scorer`] and picks the highest-scoring surviving candidate.

use crate::core::Word;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::io::Read;

/// A total, deterministic score for a word. Higher is better.
pub trait Scorer {
    fn score(&self, word: &Word) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&Word) -> f64,
{
    fn score(&self, word: &Word) -> f64 {
        self(word)
    }
}

/// Corpus frequency counts keyed by word
///
/// Words missing from the table score zero.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a count for a word. The first count recorded for a word wins.
    pub fn insert(&mut self, word: impl Into<String>, count: u64) {
        self.counts.entry(word.into()).or_insert(count);
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Read a `word,count` CSV with a header row
    ///
    /// Rows whose word is not a valid 5-letter word are skipped, since
    /// corpus frequency files cover every word length.
    ///
    /// # Errors
    /// Returns an error if the CSV is malformed or a count is not a
    /// non-negative integer.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record.with_context(|| format!("malformed CSV record {}", index + 1))?;

            let (Some(word), Some(count)) = (record.get(0), record.get(1)) else {
                anyhow::bail!("CSV record {} has fewer than two fields", index + 1);
            };

            let Ok(word) = Word::new(word) else {
                continue;
            };

            let count: u64 = count
                .parse()
                .with_context(|| format!("invalid count '{count}' for word '{word}'"))?;
            table.insert(word.text(), count);
        }

        Ok(table)
    }
}

impl Scorer for FrequencyTable {
    fn score(&self, word: &Word) -> f64 {
        self.get(word.text()).map_or(0.0, |count| count as f64)
    }
}

impl FromIterator<(String, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            table.insert(word, count);
        }
        table
    }
}

/// Pick the highest-scoring word
///
/// Ties go to the word that comes first in `words`. Returns `None` for an
/// empty list.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::recommend;
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "trace"]);
/// let refs: Vec<&Word> = words.iter().collect();
///
/// // Every word scores the same, so the first one wins
/// let best = recommend(&refs, &|_: &Word| 1.0).unwrap();
/// assert_eq!(best.text(), "crane");
/// ```
#[must_use]
pub fn recommend<'a, S: Scorer + ?Sized>(words: &[&'a Word], scorer: &S) -> Option<&'a Word> {
    let mut best: Option<(&'a Word, f64)> = None;

    for &word in words {
        let score = scorer.score(word);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((word, score));
        }
    }

    best.map(|(word, _)| word)
}
