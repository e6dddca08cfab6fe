//! Markdown output formatter

use super::ReportFormatter;
use anyhow::Result;
use morphdiff_engine::ComparisonReport;
use std::io::Write;

/// Markdown formatter - outputs each report as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    agreeing: usize,
    total: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            agreeing: 0,
            total: 0,
        }
    }
}

/// Escape characters that would break a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> ReportFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &ComparisonReport) -> Result<()> {
        writeln!(self.writer, "## {}", report.language)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| word | {} | {} | equal |",
            cell(&report.lemmatizer),
            cell(&report.stemmer)
        )?;
        writeln!(self.writer, "|------|------|------|-------|")?;
        for row in &report.rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                cell(row.word()),
                cell(row.lemma()),
                cell(row.stem()),
                if row.equal() { "yes" } else { "no" }
            )?;
        }
        writeln!(self.writer)?;

        self.agreeing += report.agreement_count();
        self.total += report.rows.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Agreement: {} of {} words*",
            self.agreeing, self.total
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
