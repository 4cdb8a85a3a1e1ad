//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kotoba_core::{DiscoveryStats, ScoredGroup};
use std::io::Write;

/// JSON formatter - outputs the length groups as one JSON array
///
/// Entropies without any recorded neighbor are written as `null`.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    groups: Vec<ScoredGroup>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            groups: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_group(&mut self, group: &ScoredGroup) -> Result<()> {
        self.groups.push(group.clone());
        Ok(())
    }

    fn finish(&mut self, _stats: &DiscoveryStats) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.groups)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.groups)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{groups, stats, SharedBuffer};

    #[test]
    fn test_groups_serialize_with_null_entropy() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        for group in groups() {
            formatter.format_group(&group).unwrap();
        }
        formatter.finish(&stats()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let groups = parsed.as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0]["length"], 2);

        let first = &groups[0]["words"][0];
        assert_eq!(first["word"], "北京");
        assert_eq!(first["frequency"], 4);
        assert_eq!(first["value"], 0.25);
        assert_eq!(first["left_entropy"], 0.3);
        assert!(first["right_entropy"].is_null());
        assert_eq!(groups[2]["words"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        formatter.format_group(&groups()[1]).unwrap();
        formatter.finish(&stats()).unwrap();
        assert_eq!(buffer.contents().lines().count(), 1);
    }
}
