//! Composite word value
//!
//! `value(w) = pmi(w) · min(left_entropy(w), right_entropy(w))`
//!
//! Taking the minimum requires a candidate to combine freely on both sides.
//! Cohesion alone cannot tell a standalone word from a fragment that only
//! ever occurs inside one longer phrase.

use crate::cohesion::PmiTable;
use crate::config::DiscoveryConfig;
use crate::entropy::EntropyTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Ngram string to composite value
pub type WordValueTable = HashMap<String, f64>;

/// How a word with no recorded neighbor on one side is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEntropyPolicy {
    /// Treat the missing side as entropy 0, so the word scores 0
    #[default]
    Zero,
    /// Leave the word out of the value table
    Exclude,
}

impl MissingEntropyPolicy {
    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingEntropyPolicy::Zero => "zero",
            MissingEntropyPolicy::Exclude => "exclude",
        }
    }
}

/// Combines cohesion and boundary entropy into one ranking signal
#[derive(Debug, Clone, PartialEq)]
pub struct WordValueRanker {
    excluded_chars: BTreeSet<char>,
    missing_entropy: MissingEntropyPolicy,
}

impl WordValueRanker {
    /// Create a ranker
    pub fn new(excluded_chars: BTreeSet<char>, missing_entropy: MissingEntropyPolicy) -> Self {
        Self {
            excluded_chars,
            missing_entropy,
        }
    }

    /// Create a ranker from a discovery configuration
    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.excluded_chars().clone(), config.missing_entropy())
    }

    /// Whether `word` may appear in the value table at all
    ///
    /// Single characters and words containing an excluded character never do.
    pub fn is_candidate(&self, word: &str) -> bool {
        let mut length = 0;
        for c in word.chars() {
            if self.excluded_chars.contains(&c) {
                return false;
            }
            length += 1;
        }
        length >= 2
    }

    /// Composite value from its parts
    ///
    /// Returns `None` when the policy excludes a word with a missing side.
    pub fn value(&self, pmi: f64, left: Option<f64>, right: Option<f64>) -> Option<f64> {
        let (left, right) = match self.missing_entropy {
            MissingEntropyPolicy::Zero => (left.unwrap_or(0.0), right.unwrap_or(0.0)),
            MissingEntropyPolicy::Exclude => (left?, right?),
        };

        let value = pmi * left.min(right);
        // pmi · 0 may be -0.0 for negative cohesion
        Some(if value == 0.0 { 0.0 } else { value })
    }

    /// Build the value table for every candidate in `pmi`
    pub fn rank(
        &self,
        pmi: &PmiTable,
        left_entropy: &EntropyTable,
        right_entropy: &EntropyTable,
    ) -> WordValueTable {
        let values: WordValueTable = pmi
            .iter()
            .filter(|(word, _)| self.is_candidate(word))
            .filter_map(|(word, &score)| {
                self.value(
                    score,
                    left_entropy.get(word).copied(),
                    right_entropy.get(word).copied(),
                )
                .map(|value| (word.clone(), value))
            })
            .collect();

        log::info!(
            "scored {} candidate words ({} missing-entropy policy)",
            values.len(),
            self.missing_entropy.as_str()
        );
        values
    }
}
