//! Top-K selection per word length

use crate::ranker::WordValueTable;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One word and its composite value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    /// The candidate word
    pub word: String,
    /// Composite value
    pub value: f64,
}

/// Best candidates of one word length, highest value first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthGroup {
    /// Word length in characters
    pub length: usize,
    /// At most `top_k` words
    pub words: Vec<RankedWord>,
}

/// Sorts the value table and partitions it by word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPresenter {
    top_k: usize,
    max_word_length: usize,
}

impl ResultPresenter {
    /// Create a presenter reporting `top_k` words for each length in
    /// `2..=max_word_length`
    pub fn new(top_k: usize, max_word_length: usize) -> Self {
        Self {
            top_k,
            max_word_length,
        }
    }

    /// All entries sorted by descending value
    ///
    /// Equal values are ordered by word so the output is reproducible.
    pub fn sorted(values: &WordValueTable) -> Vec<RankedWord> {
        let mut ranked: Vec<RankedWord> = values
            .iter()
            .map(|(word, &value)| RankedWord {
                word: word.clone(),
                value,
            })
            .collect();
        ranked.sort_by(Self::compare);
        ranked
    }

    /// Top-K groups for every length in `2..=max_word_length`
    ///
    /// A length without candidates is reported as an empty group.
    pub fn present(&self, values: &WordValueTable) -> Vec<LengthGroup> {
        let mut groups: Vec<LengthGroup> = (2..=self.max_word_length)
            .map(|length| LengthGroup {
                length,
                words: Vec::new(),
            })
            .collect();

        for ranked in Self::sorted(values) {
            let length = ranked.word.chars().count();
            if length < 2 || length > self.max_word_length {
                continue;
            }
            let group = &mut groups[length - 2];
            if group.words.len() < self.top_k {
                group.words.push(ranked);
            }
        }

        groups
    }

    fn compare(a: &RankedWord, b: &RankedWord) -> Ordering {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.word.cmp(&b.word))
    }
}
