//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use kotoba_core::{DiscoveryStats, ScoredGroup};
use std::io::Write;

/// Plain text formatter - outputs one line per word length
///
/// `<length>\t<word> <word> ...`, optionally with `word:value` pairs.
pub struct TextFormatter<W: Write> {
    writer: W,
    include_scores: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_scores: bool) -> Self {
        Self {
            writer,
            include_scores,
        }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_group(&mut self, group: &ScoredGroup) -> Result<()> {
        let words: Vec<String> = group
            .words
            .iter()
            .map(|scored| {
                if self.include_scores {
                    format!("{}:{:.4}", scored.word, scored.value)
                } else {
                    scored.word.clone()
                }
            })
            .collect();
        writeln!(self.writer, "{}\t{}", group.length, words.join(" "))?;
        Ok(())
    }

    fn finish(&mut self, _stats: &DiscoveryStats) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
