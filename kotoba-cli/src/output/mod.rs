//! Output formatting module

use anyhow::Result;
use kotoba_core::{DiscoveryStats, ScoredGroup};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output the words of one length
    fn format_group(&mut self, group: &ScoredGroup) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self, stats: &DiscoveryStats) -> Result<()>;
}

pub mod dict;
pub mod json;
pub mod markdown;
pub mod text;

pub use dict::DictFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per word length
    Text,
    /// JSON array of groups with every score
    Json,
    /// Markdown sections with corpus statistics
    Markdown,
    /// `word frequency` lines for a segmenter dictionary
    Dict,
}

impl OutputFormat {
    /// All formats in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Dict,
    ];

    /// Name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Dict => "dict",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "One line per word length: <len>\\t<words>",
            OutputFormat::Json => "JSON array of length groups with value, frequency, pmi and entropies",
            OutputFormat::Markdown => "Markdown section per length plus corpus statistics",
            OutputFormat::Dict => "One `word frequency` line per word, for dictionary segmenters",
        }
    }
}

/// Options shared by the formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Show composite values in text and markdown output
    pub include_scores: bool,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W: Write + Send + 'static>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.include_scores)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options.include_scores)),
        OutputFormat::Dict => Box::new(DictFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use kotoba_core::{DiscoveryStats, ExecutionMode, ScoredGroup, ScoredWord};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter took it
    #[derive(Clone, Default)]
    pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub fn word(word: &str, value: f64, frequency: u64) -> ScoredWord {
        ScoredWord {
            word: word.to_string(),
            value,
            frequency,
            pmi: 0.5,
            left_entropy: Some(0.3),
            right_entropy: None,
        }
    }

    pub fn groups() -> Vec<ScoredGroup> {
        vec![
            ScoredGroup {
                length: 2,
                words: vec![word("北京", 0.25, 4), word("故宫", 0.125, 2)],
            },
            ScoredGroup {
                length: 3,
                words: vec![word("天安门", 0.5, 2)],
            },
            ScoredGroup {
                length: 4,
                words: vec![],
            },
        ]
    }

    pub fn stats() -> DiscoveryStats {
        DiscoveryStats {
            sentences: 5,
            characters: 30,
            distinct_ngrams: 80,
            scored_words: 40,
            execution_mode: ExecutionMode::Sequential,
            scoring_time_ms: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_format_names_round_trip_through_clap() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_str(format.as_str(), true), Ok(format));
        }
    }
}
