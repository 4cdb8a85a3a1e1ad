//! Boundary entropy
//!
//! The entropy of the characters seen next to a candidate measures how
//! freely it combines with its context. A candidate that is always preceded
//! by the same character has a left entropy of 0 and is more likely a
//! fragment of a longer word than a word of its own.

use crate::counter::{BoundarySide, NeighborDistribution, NgramTables};
use std::collections::HashMap;

/// Ngram string to boundary entropy, for one side
///
/// A word without any recorded neighbor on that side has no entry, which is
/// distinct from an entropy of 0.
pub type EntropyTable = HashMap<String, f64>;

/// Logarithm in an arbitrary base, exact `log10` for base 10
pub(crate) fn logarithm(value: f64, base: f64) -> f64 {
    if base == 10.0 {
        value.log10()
    } else {
        value.log(base)
    }
}

/// Converts neighbor distributions into Shannon entropy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyEstimator {
    log_base: f64,
}

impl EntropyEstimator {
    /// Create an estimator using the given logarithm base
    pub fn new(log_base: f64) -> Self {
        Self { log_base }
    }

    /// Entropy of a single neighbor distribution
    ///
    /// Computed as `Σ p·log(1/p)` so a single-valued distribution yields
    /// exactly `0.0`. An empty distribution also yields `0.0`.
    pub fn estimate(&self, distribution: &NeighborDistribution) -> f64 {
        let total: u64 = distribution.values().sum();
        if total == 0 {
            return 0.0;
        }

        let total = total as f64;
        distribution
            .values()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let count = count as f64;
                (count / total) * logarithm(total / count, self.log_base)
            })
            .sum()
    }

    /// Entropy table for one side of every counted ngram
    pub fn build(&self, tables: &NgramTables, side: BoundarySide) -> EntropyTable {
        let table: EntropyTable = tables
            .neighbors(side)
            .iter()
            .map(|(word, distribution)| (word.clone(), self.estimate(distribution)))
            .collect();

        log::debug!("{:?} entropy computed for {} ngrams", side, table.len());
        table
    }
}

impl Default for EntropyEstimator {
    fn default() -> Self {
        Self::new(crate::config::defaults::LOG_BASE)
    }
}
