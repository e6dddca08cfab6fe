//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use morphdiff_engine::{ComparisonReport, ComparisonRow, Language};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs all reports as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<ReportData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ReportData {
    /// Language of the compared words
    pub language: Language,
    /// Lemmatizer name
    pub lemmatizer: String,
    /// Stemmer name
    pub stemmer: String,
    /// Number of rows where lemma and stem agree
    pub agreement: usize,
    /// Per-word rows
    pub rows: Vec<ComparisonRow>,
}

impl From<&ComparisonReport> for ReportData {
    fn from(report: &ComparisonReport) -> Self {
        Self {
            language: report.language,
            lemmatizer: report.lemmatizer.clone(),
            stemmer: report.stemmer.clone(),
            agreement: report.agreement_count(),
            rows: report.rows.clone(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> ReportFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &ComparisonReport) -> Result<()> {
        self.reports.push(ReportData::from(report));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
