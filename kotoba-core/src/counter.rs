//! Ngram and neighbor counting
//!
//! [`NgramCounter`] makes the single pass over the corpus. For every
//! sentence and every window length `1..=max_word_length` it counts each
//! substring and the characters directly left and right of it. Neighbors are
//! only recorded inside a sentence, never across a line break, so a word that
//! often starts or ends a sentence shows lower entropy on that side.
//!
//! [`NgramCounter::finish`] consumes the counter and returns the immutable
//! [`NgramTables`] every later stage reads from.

use crate::error::Result;
use std::collections::{BTreeMap, HashMap};

/// Ngram string to occurrence count
pub type FrequencyTable = HashMap<String, u64>;

/// Adjacent character to occurrence count, for one ngram and one side
pub type NeighborDistribution = BTreeMap<char, u64>;

/// Ngram string to its neighbor distribution on one side
pub type NeighborTable = HashMap<String, NeighborDistribution>;

/// Side of a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundarySide {
    /// Characters preceding the word
    Left,
    /// Characters following the word
    Right,
}

/// Accumulates counts over a corpus
#[derive(Debug, Clone)]
pub struct NgramCounter {
    max_word_length: usize,
    frequencies: FrequencyTable,
    length_totals: BTreeMap<usize, u64>,
    left_neighbors: NeighborTable,
    right_neighbors: NeighborTable,
    sentences: u64,
    characters: u64,
}

impl NgramCounter {
    /// Create a counter for windows of length `1..=max_word_length`
    pub fn new(max_word_length: usize) -> Self {
        Self {
            max_word_length,
            frequencies: HashMap::new(),
            length_totals: BTreeMap::new(),
            left_neighbors: HashMap::new(),
            right_neighbors: HashMap::new(),
            sentences: 0,
            characters: 0,
        }
    }

    /// Count every ngram of one sentence
    ///
    /// Windows slide over Unicode code points, not bytes. A sentence shorter
    /// than a window length contributes nothing for that length.
    pub fn add_sentence(&mut self, sentence: &str) {
        let chars: Vec<char> = sentence.chars().collect();
        self.sentences += 1;
        self.characters += chars.len() as u64;

        for length in 1..=self.max_word_length {
            if chars.len() < length {
                break;
            }

            let mut windows = 0u64;
            for start in 0..=chars.len() - length {
                let end = start + length;
                let word: String = chars[start..end].iter().collect();

                if start > 0 {
                    Self::record_neighbor(&mut self.left_neighbors, &word, chars[start - 1]);
                }
                if end < chars.len() {
                    Self::record_neighbor(&mut self.right_neighbors, &word, chars[end]);
                }

                *self.frequencies.entry(word).or_insert(0) += 1;
                windows += 1;
            }

            *self.length_totals.entry(length).or_insert(0) += windows;
        }
    }

    /// Count in-memory sentences
    pub fn count_sentences<I, S>(&mut self, sentences: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sentence in sentences {
            self.add_sentence(sentence.as_ref());
        }
    }

    /// Count a fallible sentence stream such as a [`crate::CorpusLoader`]
    ///
    /// Stops at the first read error. Returns the number of sentences counted
    /// by this call.
    pub fn count_corpus<I>(&mut self, sentences: I) -> Result<u64>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let before = self.sentences;
        for sentence in sentences {
            self.add_sentence(&sentence?);
        }
        Ok(self.sentences - before)
    }

    /// Number of sentences counted so far
    pub fn sentence_count(&self) -> u64 {
        self.sentences
    }

    /// Freeze the counts
    pub fn finish(self) -> NgramTables {
        log::info!(
            "counted {} sentences, {} characters, {} distinct ngrams",
            self.sentences,
            self.characters,
            self.frequencies.len()
        );

        NgramTables {
            max_word_length: self.max_word_length,
            frequencies: self.frequencies,
            length_totals: self.length_totals,
            left_neighbors: self.left_neighbors,
            right_neighbors: self.right_neighbors,
            sentences: self.sentences,
            characters: self.characters,
        }
    }

    fn record_neighbor(table: &mut NeighborTable, word: &str, neighbor: char) {
        if let Some(distribution) = table.get_mut(word) {
            *distribution.entry(neighbor).or_insert(0) += 1;
            return;
        }
        table.insert(word.to_string(), BTreeMap::from([(neighbor, 1)]));
    }
}

/// Immutable counting tables produced by [`NgramCounter::finish`]
///
/// Lookups never insert: a word that was never counted reads as zero or
/// `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NgramTables {
    max_word_length: usize,
    frequencies: FrequencyTable,
    length_totals: BTreeMap<usize, u64>,
    left_neighbors: NeighborTable,
    right_neighbors: NeighborTable,
    sentences: u64,
    characters: u64,
}

impl NgramTables {
    /// Occurrence count of `word` (0 if never seen)
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Sum of the counts of all ngrams of `length` characters
    pub fn length_total(&self, length: usize) -> u64 {
        self.length_totals.get(&length).copied().unwrap_or(0)
    }

    /// Every counted ngram with its frequency
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Neighbor table for one side
    pub fn neighbors(&self, side: BoundarySide) -> &NeighborTable {
        match side {
            BoundarySide::Left => &self.left_neighbors,
            BoundarySide::Right => &self.right_neighbors,
        }
    }

    /// Neighbor distribution of `word` on one side, if any neighbor was seen
    pub fn neighbor_distribution(
        &self,
        word: &str,
        side: BoundarySide,
    ) -> Option<&NeighborDistribution> {
        self.neighbors(side).get(word)
    }

    /// Widest window that was counted
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Number of distinct ngrams across all lengths
    pub fn distinct_ngrams(&self) -> usize {
        self.frequencies.len()
    }

    /// Number of sentences counted
    pub fn sentence_count(&self) -> u64 {
        self.sentences
    }

    /// Number of characters counted
    pub fn character_count(&self) -> u64 {
        self.characters
    }
}
