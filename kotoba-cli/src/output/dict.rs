//! Segmenter dictionary output formatter

use super::OutputFormatter;
use anyhow::Result;
use kotoba_core::{DiscoveryStats, ScoredGroup};
use std::io::Write;

/// Dictionary formatter - one `word frequency` line per reported word
///
/// The output can be loaded directly as the word list of a
/// maximum-matching segmenter.
pub struct DictFormatter<W: Write> {
    writer: W,
}

impl<W: Write> DictFormatter<W> {
    /// Create a new dictionary formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for DictFormatter<W> {
    fn format_group(&mut self, group: &ScoredGroup) -> Result<()> {
        for scored in &group.words {
            writeln!(self.writer, "{} {}", scored.word, scored.frequency)?;
        }
        Ok(())
    }

    fn finish(&mut self, _stats: &DiscoveryStats) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{groups, stats, SharedBuffer};

    #[test]
    fn test_word_frequency_lines() {
        let buffer = SharedBuffer::default();
        let mut formatter = DictFormatter::new(buffer.clone());
        for group in groups() {
            formatter.format_group(&group).unwrap();
        }
        formatter.finish(&stats()).unwrap();

        assert_eq!(buffer.contents(), "北京 4\n故宫 2\n天安门 2\n");
    }
}
