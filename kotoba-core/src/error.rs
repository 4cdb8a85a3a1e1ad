//! Error types for word discovery

use thiserror::Error;

/// Errors raised while loading a corpus or scoring candidates
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The corpus source could not be opened
    #[error("failed to open corpus {path}: {source}")]
    CorpusUnreadable {
        /// Path of the corpus that failed to open
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Reading a sentence from an opened corpus failed
    #[error("I/O error while reading corpus: {0}")]
    Io(#[from] std::io::Error),

    /// The corpus holds no characters, so no probability has a denominator
    #[error("corpus contains no characters; cohesion is undefined")]
    EmptyCorpus,

    /// Configuration values are out of range
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Configuration text could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The dedicated scoring thread pool could not be built
    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result type for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
