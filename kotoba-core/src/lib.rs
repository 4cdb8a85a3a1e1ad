//! Unsupervised new-word discovery for unsegmented text
//!
//! This crate finds multi-character words in a corpus that has no word
//! boundaries, such as Chinese or Japanese text. Every substring up to a
//! configured length is a candidate, scored by two signals:
//!
//! - **Cohesion**: length-normalized pointwise mutual information between
//!   the word and its characters
//! - **Freedom**: the smaller of the left and right boundary entropies
//!
//! The composite value is `pmi * min(left_entropy, right_entropy)`.
//!
//! # Example
//!
//! ```
//! use kotoba_core::{DiscoveryConfig, WordDiscovery};
//!
//! let config = DiscoveryConfig::builder().max_word_length(3).top_k(5).build()?;
//! let discovery = WordDiscovery::with_config(config)?;
//! let result = discovery.discover_text("北京天安门\n我爱北京\n北京很大\n")?;
//!
//! for group in result.top_words() {
//!     println!("{}: {:?}", group.length, group.words);
//! }
//! # Ok::<(), kotoba_core::DiscoveryError>(())
//! ```

#![warn(missing_docs)]

pub mod cohesion;
pub mod config;
pub mod corpus;
pub mod counter;
pub mod discovery;
pub mod entropy;
pub mod error;
pub mod executor;
pub mod presenter;
pub mod ranker;

// Re-export key types
pub use cohesion::{CohesionScorer, PmiTable};
pub use config::{DiscoveryConfig, DiscoveryConfigBuilder};
pub use corpus::{CorpusLoader, CorpusSource};
pub use counter::{BoundarySide, NgramCounter, NgramTables};
pub use discovery::{Discovery, DiscoveryStats, ScoredGroup, ScoredWord, WordDiscovery};
pub use entropy::{EntropyEstimator, EntropyTable};
pub use error::{DiscoveryError, Result};
pub use executor::{ExecutionMode, Executor};
pub use presenter::{LengthGroup, RankedWord, ResultPresenter};
pub use ranker::{MissingEntropyPolicy, WordValueRanker, WordValueTable};
