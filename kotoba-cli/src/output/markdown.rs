//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use kotoba_core::{DiscoveryStats, ScoredGroup};
use std::io::Write;

/// Markdown formatter - a section per word length and a statistics footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_scores: bool,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_scores: bool) -> Self {
        Self {
            writer,
            include_scores,
            word_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_group(&mut self, group: &ScoredGroup) -> Result<()> {
        writeln!(self.writer, "## Length {}", group.length)?;
        writeln!(self.writer)?;

        if group.words.is_empty() {
            writeln!(self.writer, "*No candidates*")?;
        }
        for (rank, scored) in group.words.iter().enumerate() {
            if self.include_scores {
                writeln!(
                    self.writer,
                    "{}. {} ({:.4})",
                    rank + 1,
                    scored.word,
                    scored.value
                )?;
            } else {
                writeln!(self.writer, "{}. {}", rank + 1, scored.word)?;
            }
        }
        writeln!(self.writer)?;

        self.word_count += group.words.len();
        Ok(())
    }

    fn finish(&mut self, stats: &DiscoveryStats) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Reported words: {}*", self.word_count)?;
        writeln!(
            self.writer,
            "*Sentences: {}, characters: {}, distinct ngrams: {}, scored words: {}*",
            stats.sentences, stats.characters, stats.distinct_ngrams, stats.scored_words
        )?;
        writeln!(
            self.writer,
            "*Scoring: {} in {:.1} ms*",
            stats.execution_mode.as_str(),
            stats.scoring_time_ms
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
