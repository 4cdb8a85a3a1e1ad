//! Sequential execution strategy

use crate::{
    cohesion::CohesionScorer,
    counter::{BoundarySide, NgramTables},
    entropy::EntropyEstimator,
    error::Result,
    executor::{ExecutionMode, Executor, ScoringTables},
};

/// Single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn score(
        &self,
        tables: &NgramTables,
        entropy: &EntropyEstimator,
        cohesion: &CohesionScorer,
    ) -> Result<ScoringTables> {
        let pmi = cohesion.build(tables)?;
        let left_entropy = entropy.build(tables, BoundarySide::Left);
        let right_entropy = entropy.build(tables, BoundarySide::Right);

        Ok(ScoringTables {
            pmi,
            left_entropy,
            right_entropy,
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
