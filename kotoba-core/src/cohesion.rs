//! Length-normalized PMI cohesion
//!
//! For an ngram `w` of `n` characters:
//!
//! ```text
//! p(w)      = freq(w) / total(n)
//! p_ind(w)  = Π freq(c) / total(1)   for each character c of w
//! pmi(w)    = log(p(w) / p_ind(w)) / n
//! ```
//!
//! Dividing by `n` keeps longer phrases from dominating shorter words just
//! because the log-ratio grows with length.

use crate::counter::NgramTables;
use crate::entropy::logarithm;
use crate::error::{DiscoveryError, Result};
use std::collections::HashMap;

/// Ngram string to cohesion score
pub type PmiTable = HashMap<String, f64>;

/// Scores ngrams against the character independence model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohesionScorer {
    log_base: f64,
}

impl CohesionScorer {
    /// Create a scorer using the given logarithm base
    pub fn new(log_base: f64) -> Self {
        Self { log_base }
    }

    /// Cohesion of a single word
    ///
    /// Returns `None` for a word that was never counted.
    ///
    /// # Errors
    /// [`DiscoveryError::EmptyCorpus`] if the tables hold no characters.
    pub fn score(&self, tables: &NgramTables, word: &str) -> Result<Option<f64>> {
        let character_total = Self::character_total(tables)?;
        Ok(self.score_with_total(tables, word, character_total))
    }

    /// Cohesion of every counted ngram, length 1 included
    ///
    /// # Errors
    /// [`DiscoveryError::EmptyCorpus`] if the tables hold no characters.
    pub fn build(&self, tables: &NgramTables) -> Result<PmiTable> {
        let character_total = Self::character_total(tables)?;

        let table: PmiTable = tables
            .frequencies()
            .keys()
            .filter_map(|word| {
                self.score_with_total(tables, word, character_total)
                    .map(|pmi| (word.clone(), pmi))
            })
            .collect();

        log::debug!("cohesion computed for {} ngrams", table.len());
        Ok(table)
    }

    fn character_total(tables: &NgramTables) -> Result<f64> {
        match tables.length_total(1) {
            0 => Err(DiscoveryError::EmptyCorpus),
            total => Ok(total as f64),
        }
    }

    fn score_with_total(&self, tables: &NgramTables, word: &str, character_total: f64) -> Option<f64> {
        let frequency = tables.frequency(word);
        if frequency == 0 {
            return None;
        }

        let length = word.chars().count();
        let p_word = frequency as f64 / tables.length_total(length) as f64;
        let character_probabilities = word.chars().map(|c| {
            let mut buf = [0u8; 4];
            tables.frequency(c.encode_utf8(&mut buf)) as f64 / character_total
        });

        Some(self.normalized_pmi(p_word, character_probabilities, length))
    }

    /// `log(p_word / Π p_c) / length`, summed in log space
    ///
    /// The product of many small character probabilities underflows to 0.0
    /// long before the sum of their logarithms loses precision.
    fn normalized_pmi<I>(&self, p_word: f64, character_probabilities: I, length: usize) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let log_independent: f64 = character_probabilities
            .into_iter()
            .map(|p| logarithm(p, self.log_base))
            .sum();

        (logarithm(p_word, self.log_base) - log_independent) / length as f64
    }
}

impl Default for CohesionScorer {
    fn default() -> Self {
        Self::new(crate::config::defaults::LOG_BASE)
    }
}
