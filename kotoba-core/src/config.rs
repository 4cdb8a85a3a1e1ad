//! Configuration for word discovery
//!
//! [`DiscoveryConfig`] can be built in code through [`DiscoveryConfigBuilder`]
//! or parsed from TOML. Every field has a default, so an empty document is a
//! valid configuration.

use crate::{
    error::{DiscoveryError, Result},
    executor::ExecutionMode,
    ranker::MissingEntropyPolicy,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Widest ngram window considered
    pub const MAX_WORD_LENGTH: usize = 4;

    /// Upper bound accepted for `max_word_length`
    pub const MAX_WORD_LENGTH_LIMIT: usize = 64;

    /// Number of candidates reported per word length
    pub const TOP_K: usize = 10;

    /// Sentence-internal delimiters that never appear in a reported word
    pub const EXCLUDED_CHARS: [char; 4] = ['，', '、', '；', '：'];

    /// Logarithm base for entropy and PMI
    pub const LOG_BASE: f64 = 10.0;
}

/// Word discovery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    pub(crate) max_word_length: usize,
    pub(crate) top_k: usize,
    pub(crate) excluded_chars: BTreeSet<char>,
    pub(crate) log_base: f64,
    pub(crate) missing_entropy: MissingEntropyPolicy,
    pub(crate) execution_mode: ExecutionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) threads: Option<usize>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_word_length: defaults::MAX_WORD_LENGTH,
            top_k: defaults::TOP_K,
            excluded_chars: defaults::EXCLUDED_CHARS.into_iter().collect(),
            log_base: defaults::LOG_BASE,
            missing_entropy: MissingEntropyPolicy::default(),
            execution_mode: ExecutionMode::default(),
            threads: None,
        }
    }
}

impl DiscoveryConfig {
    /// Create a configuration builder
    pub fn builder() -> DiscoveryConfigBuilder {
        DiscoveryConfigBuilder::default()
    }

    /// Start a builder seeded with this configuration's values
    pub fn to_builder(&self) -> DiscoveryConfigBuilder {
        DiscoveryConfigBuilder {
            config: self.clone(),
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: DiscoveryConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            DiscoveryError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| DiscoveryError::Configuration(e.to_string()))
    }

    /// Widest ngram window considered
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Number of candidates reported per word length
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Characters that disqualify a candidate
    pub fn excluded_chars(&self) -> &BTreeSet<char> {
        &self.excluded_chars
    }

    /// Logarithm base shared by entropy and PMI
    pub fn log_base(&self) -> f64 {
        self.log_base
    }

    /// How a missing boundary entropy is scored
    pub fn missing_entropy(&self) -> MissingEntropyPolicy {
        self.missing_entropy
    }

    /// Requested scheduling of the scoring stage
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Dedicated scoring pool size (None = rayon's global pool)
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_word_length == 0 {
            return Err(DiscoveryError::Configuration(
                "max_word_length must be at least 1".into(),
            ));
        }

        if self.max_word_length > defaults::MAX_WORD_LENGTH_LIMIT {
            return Err(DiscoveryError::Configuration(format!(
                "max_word_length must be at most {}, got {}",
                defaults::MAX_WORD_LENGTH_LIMIT,
                self.max_word_length
            )));
        }

        if self.top_k == 0 {
            return Err(DiscoveryError::Configuration(
                "top_k must be greater than 0".into(),
            ));
        }

        // bases below 1 make every entropy and cohesion score negative
        if !self.log_base.is_finite() || self.log_base <= 1.0 {
            return Err(DiscoveryError::Configuration(format!(
                "log_base must be a finite number greater than 1, got {}",
                self.log_base
            )));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(DiscoveryError::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`DiscoveryConfig`]
#[derive(Debug, Default)]
pub struct DiscoveryConfigBuilder {
    config: DiscoveryConfig,
}

impl DiscoveryConfigBuilder {
    /// Create a builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the widest ngram window
    pub fn max_word_length(mut self, length: usize) -> Self {
        self.config.max_word_length = length;
        self
    }

    /// Set how many candidates are reported per length
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Replace the excluded character set
    pub fn excluded_chars<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.config.excluded_chars = chars.into_iter().collect();
        self
    }

    /// Set the logarithm base
    pub fn log_base(mut self, base: f64) -> Self {
        self.config.log_base = base;
        self
    }

    /// Set the missing-entropy policy
    pub fn missing_entropy(mut self, policy: MissingEntropyPolicy) -> Self {
        self.config.missing_entropy = policy;
        self
    }

    /// Set the execution mode of the scoring stage
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the number of scoring threads (None = global pool)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<DiscoveryConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.max_word_length(), 4);
        assert_eq!(config.top_k(), 10);
        assert_eq!(config.log_base(), 10.0);
        assert!(config.excluded_chars().contains(&'，'));
        assert_eq!(config.missing_entropy(), MissingEntropyPolicy::Zero);
        assert!(config.threads().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = DiscoveryConfig::builder()
            .max_word_length(6)
            .top_k(3)
            .excluded_chars(['。'])
            .missing_entropy(MissingEntropyPolicy::Exclude)
            .execution_mode(ExecutionMode::Sequential)
            .threads(Some(2))
            .build()
            .unwrap();

        assert_eq!(config.max_word_length(), 6);
        assert_eq!(config.top_k(), 3);
        assert_eq!(config.excluded_chars().len(), 1);
        assert!(config.excluded_chars().contains(&'。'));
        assert_eq!(config.missing_entropy(), MissingEntropyPolicy::Exclude);
        assert_eq!(config.execution_mode(), ExecutionMode::Sequential);
        assert_eq!(config.threads(), Some(2));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(DiscoveryConfig::builder().max_word_length(0).build().is_err());
        assert!(DiscoveryConfig::builder().top_k(0).build().is_err());
        assert!(DiscoveryConfig::builder().log_base(1.0).build().is_err());
        assert!(DiscoveryConfig::builder().log_base(-2.0).build().is_err());
        assert!(DiscoveryConfig::builder().log_base(f64::NAN).build().is_err());
        assert!(DiscoveryConfig::builder().threads(Some(0)).build().is_err());
    }

    #[test]
    fn test_log_base_below_one_rejected() {
        for base in [0.5, 0.1, f64::MIN_POSITIVE] {
            let error = DiscoveryConfig::builder().log_base(base).build().unwrap_err();
            assert!(error.to_string().contains("greater than 1"));
        }
        assert!(DiscoveryConfig::builder().log_base(f64::INFINITY).build().is_err());
        assert!(DiscoveryConfig::builder().log_base(2.0).build().is_ok());
    }

    #[test]
    fn test_max_word_length_is_bounded() {
        let limit = defaults::MAX_WORD_LENGTH_LIMIT;
        assert!(DiscoveryConfig::builder().max_word_length(limit).build().is_ok());
        assert!(DiscoveryConfig::builder()
            .max_word_length(limit + 1)
            .build()
            .is_err());
        let error = DiscoveryConfig::builder()
            .max_word_length(usize::MAX)
            .build()
            .unwrap_err();
        assert!(error.to_string().contains("at most"));
        assert!(DiscoveryConfig::from_toml_str("max_word_length = 4000000000").is_err());
    }

    #[test]
    fn test_from_toml_partial_document() {
        let config = DiscoveryConfig::from_toml_str(
            r#"
max_word_length = 5
excluded_chars = ["，", "。"]
missing_entropy = "exclude"
execution_mode = "sequential"
"#,
        )
        .unwrap();

        assert_eq!(config.max_word_length(), 5);
        assert_eq!(config.top_k(), defaults::TOP_K);
        assert!(config.excluded_chars().contains(&'。'));
        assert_eq!(config.missing_entropy(), MissingEntropyPolicy::Exclude);
        assert_eq!(config.execution_mode(), ExecutionMode::Sequential);
    }

    #[test]
    fn test_from_toml_empty_document_is_default() {
        let config = DiscoveryConfig::from_toml_str("").unwrap();
        assert_eq!(config, DiscoveryConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_and_invalid() {
        assert!(matches!(
            DiscoveryConfig::from_toml_str("window = 3"),
            Err(DiscoveryError::ConfigParse(_))
        ));
        assert!(matches!(
            DiscoveryConfig::from_toml_str("top_k = 0"),
            Err(DiscoveryError::Configuration(_))
        ));
    }

    #[test]
    fn test_toml_round_trip_preserves_values() {
        let config = DiscoveryConfig::builder()
            .top_k(7)
            .threads(Some(3))
            .build()
            .unwrap();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("top_k = 7"));
        assert_eq!(DiscoveryConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_to_builder_keeps_existing_values() {
        let base = DiscoveryConfig::builder().top_k(4).build().unwrap();
        let derived = base.to_builder().max_word_length(3).build().unwrap();
        assert_eq!(derived.top_k(), 4);
        assert_eq!(derived.max_word_length(), 3);
    }
}
