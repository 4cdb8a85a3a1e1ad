//! Scheduling of the scoring stage
//!
//! Left entropy, right entropy and cohesion are pure functions of the
//! finished [`NgramTables`]. They share no state, so an executor may compute
//! them in any order or concurrently; each writes only its own table.

use crate::cohesion::{CohesionScorer, PmiTable};
use crate::counter::NgramTables;
use crate::entropy::{EntropyEstimator, EntropyTable};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Compute the three tables one after another
    Sequential,
    /// Compute the three tables as joined rayon tasks
    Parallel,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        if cfg!(feature = "parallel") {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl ExecutionMode {
    /// Name used in configuration files and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
        }
    }

    /// The mode that will actually run in this build
    ///
    /// `Parallel` falls back to `Sequential` when the `parallel` feature is
    /// disabled.
    pub fn effective(self) -> ExecutionMode {
        #[cfg(not(feature = "parallel"))]
        {
            if self == ExecutionMode::Parallel {
                log::warn!("built without the `parallel` feature, scoring sequentially");
                return ExecutionMode::Sequential;
            }
        }

        self
    }
}

/// Cohesion and entropy tables derived from one [`NgramTables`]
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTables {
    /// Cohesion of every ngram
    pub pmi: PmiTable,
    /// Left boundary entropy
    pub left_entropy: EntropyTable,
    /// Right boundary entropy
    pub right_entropy: EntropyTable,
}

/// Strategy computing the scoring tables
pub trait Executor: Send + Sync {
    /// Compute cohesion and both entropy tables
    fn score(
        &self,
        tables: &NgramTables,
        entropy: &EntropyEstimator,
        cohesion: &CohesionScorer,
    ) -> Result<ScoringTables>;

    /// Mode implemented by this executor
    fn mode(&self) -> ExecutionMode;
}
