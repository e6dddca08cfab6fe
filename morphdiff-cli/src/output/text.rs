//! Plain text output formatter

use super::ReportFormatter;
use anyhow::Result;
use morphdiff_engine::ComparisonReport;
use std::io::Write;

/// Text formatter - outputs the fixed-width comparison tables
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> ReportFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &ComparisonReport) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{report}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{english_report, SharedBuffer};

    #[test]
    fn test_tables_are_separated_by_blank_lines() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        let report = english_report();

        formatter.format_report(&report).unwrap();
        formatter.format_report(&report).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert!(output.starts_with("\nEnglish words:\n"));
        assert_eq!(output.matches("English words:").count(), 2);
        assert!(output.contains("\n\nEnglish words:"));
    }
}
