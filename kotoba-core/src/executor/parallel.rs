//! Parallel execution strategy

use crate::{
    cohesion::CohesionScorer,
    counter::{BoundarySide, NgramTables},
    entropy::EntropyEstimator,
    error::{DiscoveryError, Result},
    executor::{ExecutionMode, Executor, ScoringTables},
};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Executor running cohesion and both entropy tables as joined rayon tasks
///
/// Every task only reads the shared tables, so no locking is involved.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: Option<ThreadPool>,
}

impl ParallelExecutor {
    /// Create a parallel executor
    ///
    /// With `threads` set, a dedicated pool of that size is built; otherwise
    /// rayon's global pool is used.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(count)
                    .thread_name(|i| format!("kotoba-score-{i}"))
                    .build()
                    .map_err(|e| DiscoveryError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        log::debug!(
            "parallel scoring on {} threads",
            threads.unwrap_or_else(num_cpus::get)
        );

        Ok(Self { pool })
    }

    fn score_joined(
        tables: &NgramTables,
        entropy: &EntropyEstimator,
        cohesion: &CohesionScorer,
    ) -> Result<ScoringTables> {
        let (pmi, (left_entropy, right_entropy)) = rayon::join(
            || cohesion.build(tables),
            || {
                rayon::join(
                    || entropy.build(tables, BoundarySide::Left),
                    || entropy.build(tables, BoundarySide::Right),
                )
            },
        );

        Ok(ScoringTables {
            pmi: pmi?,
            left_entropy,
            right_entropy,
        })
    }
}

impl Executor for ParallelExecutor {
    fn score(
        &self,
        tables: &NgramTables,
        entropy: &EntropyEstimator,
        cohesion: &CohesionScorer,
    ) -> Result<ScoringTables> {
        match &self.pool {
            Some(pool) => pool.install(|| Self::score_joined(tables, entropy, cohesion)),
            None => Self::score_joined(tables, entropy, cohesion),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
