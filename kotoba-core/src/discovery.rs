//! Word discovery pipeline
//!
//! [`WordDiscovery`] wires the stages together:
//!
//! ```text
//! CorpusLoader -> NgramCounter -> { EntropyEstimator x2, CohesionScorer } -> WordValueRanker -> ResultPresenter
//! ```
//!
//! Counting finishes before any scoring starts. The scoring stage runs on
//! the configured [`Executor`].

use crate::{
    cohesion::{CohesionScorer, PmiTable},
    config::DiscoveryConfig,
    corpus::{CorpusLoader, CorpusSource},
    counter::{BoundarySide, NgramCounter, NgramTables},
    entropy::{EntropyEstimator, EntropyTable},
    error::Result,
    executor::{ExecutionMode, Executor, ScoringTables, SequentialExecutor},
    presenter::{LengthGroup, ResultPresenter},
    ranker::{WordValueRanker, WordValueTable},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Entry point for word discovery
pub struct WordDiscovery {
    config: DiscoveryConfig,
    executor: Box<dyn Executor>,
}

impl std::fmt::Debug for WordDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordDiscovery")
            .field("config", &self.config)
            .field("mode", &self.executor.mode())
            .finish()
    }
}

impl WordDiscovery {
    /// Create a pipeline with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(DiscoveryConfig::default())
    }

    /// Create a pipeline with a custom configuration
    pub fn with_config(config: DiscoveryConfig) -> Result<Self> {
        config.validate()?;

        if config.max_word_length() < 2 {
            log::warn!(
                "max_word_length {} leaves no multi-character candidates",
                config.max_word_length()
            );
        }

        let executor: Box<dyn Executor> = match config.execution_mode().effective() {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Box::new(ParallelExecutor::new(config.threads())?),
            _ => Box::new(SequentialExecutor),
        };

        log::debug!("discovery configuration: {config:?}");
        Ok(Self { config, executor })
    }

    /// The active configuration
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// An empty counter sized for this configuration
    ///
    /// Use it to count several corpora into one set of tables, then pass the
    /// result of [`NgramCounter::finish`] to [`WordDiscovery::score`].
    pub fn counter(&self) -> NgramCounter {
        NgramCounter::new(self.config.max_word_length())
    }

    /// Count and score a corpus source
    pub fn discover(&self, source: CorpusSource) -> Result<Discovery> {
        let mut counter = self.counter();
        counter.count_corpus(CorpusLoader::open(source)?)?;
        self.score(counter.finish())
    }

    /// Count and score a corpus file
    pub fn discover_path<P: Into<PathBuf>>(&self, path: P) -> Result<Discovery> {
        self.discover(CorpusSource::File(path.into()))
    }

    /// Count and score in-memory text, one sentence per line
    pub fn discover_text(&self, text: &str) -> Result<Discovery> {
        self.discover(CorpusSource::from(text))
    }

    /// Count and score already split sentences
    ///
    /// Sentences are used as given, without trimming.
    pub fn discover_sentences<I, S>(&self, sentences: I) -> Result<Discovery>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counter = self.counter();
        counter.count_sentences(sentences);
        self.score(counter.finish())
    }

    /// Score finished counting tables
    ///
    /// # Errors
    /// [`crate::DiscoveryError::EmptyCorpus`] if the tables hold no characters.
    pub fn score(&self, tables: NgramTables) -> Result<Discovery> {
        let start = Instant::now();

        let entropy = EntropyEstimator::new(self.config.log_base());
        let cohesion = CohesionScorer::new(self.config.log_base());
        let scoring = self.executor.score(&tables, &entropy, &cohesion)?;

        let values = WordValueRanker::from_config(&self.config).rank(
            &scoring.pmi,
            &scoring.left_entropy,
            &scoring.right_entropy,
        );

        let elapsed = start.elapsed();
        let stats = DiscoveryStats {
            sentences: tables.sentence_count(),
            characters: tables.character_count(),
            distinct_ngrams: tables.distinct_ngrams(),
            scored_words: values.len(),
            execution_mode: self.executor.mode(),
            scoring_time_ms: elapsed.as_secs_f64() * 1000.0,
        };
        log::info!(
            "scoring finished in {:.1} ms ({} mode)",
            stats.scoring_time_ms,
            stats.execution_mode.as_str()
        );

        Ok(Discovery {
            presenter: ResultPresenter::new(self.config.top_k(), self.config.max_word_length()),
            tables,
            scoring,
            values,
            stats,
        })
    }
}

/// Corpus and run statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryStats {
    /// Sentences counted
    pub sentences: u64,
    /// Characters counted
    pub characters: u64,
    /// Distinct ngrams across all lengths
    pub distinct_ngrams: usize,
    /// Entries in the value table
    pub scored_words: usize,
    /// Mode the scoring stage ran in
    pub execution_mode: ExecutionMode,
    /// Wall time of the scoring stage in milliseconds
    pub scoring_time_ms: f64,
}

/// Every signal known about one reported word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The candidate word
    pub word: String,
    /// Composite value
    pub value: f64,
    /// Occurrences in the corpus
    pub frequency: u64,
    /// Length-normalized cohesion
    pub pmi: f64,
    /// Left boundary entropy, `None` without left neighbors
    pub left_entropy: Option<f64>,
    /// Right boundary entropy, `None` without right neighbors
    pub right_entropy: Option<f64>,
}

/// Reported words of one length with their details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGroup {
    /// Word length in characters
    pub length: usize,
    /// Words, highest value first
    pub words: Vec<ScoredWord>,
}

/// Result of a discovery run
///
/// Holds the counting tables and every derived table; none of them changes
/// after construction.
#[derive(Debug, Clone)]
pub struct Discovery {
    presenter: ResultPresenter,
    tables: NgramTables,
    scoring: ScoringTables,
    values: WordValueTable,
    stats: DiscoveryStats,
}

impl Discovery {
    /// The counting tables
    pub fn tables(&self) -> &NgramTables {
        &self.tables
    }

    /// Cohesion of every ngram, length 1 included
    pub fn pmi(&self) -> &PmiTable {
        &self.scoring.pmi
    }

    /// Boundary entropy table for one side
    pub fn entropy(&self, side: BoundarySide) -> &EntropyTable {
        match side {
            BoundarySide::Left => &self.scoring.left_entropy,
            BoundarySide::Right => &self.scoring.right_entropy,
        }
    }

    /// Composite values of all candidates
    pub fn word_values(&self) -> &WordValueTable {
        &self.values
    }

    /// Composite value of one word
    pub fn value(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    /// Run statistics
    pub fn stats(&self) -> &DiscoveryStats {
        &self.stats
    }

    /// Top-K words for each length in `2..=max_word_length`
    pub fn top_words(&self) -> Vec<LengthGroup> {
        self.presenter.present(&self.values)
    }

    /// Every signal for one scored word
    pub fn score_of(&self, word: &str) -> Option<ScoredWord> {
        let value = self.value(word)?;
        Some(ScoredWord {
            word: word.to_string(),
            value,
            frequency: self.tables.frequency(word),
            pmi: self.scoring.pmi.get(word).copied().unwrap_or(0.0),
            left_entropy: self.scoring.left_entropy.get(word).copied(),
            right_entropy: self.scoring.right_entropy.get(word).copied(),
        })
    }

    /// Top-K words for each length with all their signals
    pub fn report(&self) -> Vec<ScoredGroup> {
        self.top_words()
            .into_iter()
            .map(|group| ScoredGroup {
                length: group.length,
                words: group
                    .words
                    .iter()
                    .filter_map(|ranked| self.score_of(&ranked.word))
                    .collect(),
            })
            .collect()
    }
}
