//! Comparison reporter
//!
//! Pairs every word with its lemma and stem and renders the fixed-width
//! table printed by the CLI.

use crate::error::Result;
use morphdiff_core::{align_rows, ComparisonRow, Language, ReductionResult, WordList};
use serde::Serialize;
use std::fmt;

/// Width of each table column, in characters
pub const COLUMN_WIDTH: usize = 22;

/// Length of the horizontal rules around the header
pub const RULE_WIDTH: usize = 70;

/// Header of the equality column
pub const EQUAL_HEADER: &str = "equal";

/// Aligned comparison of one lemmatizer against one stemmer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Language of the compared words
    pub language: Language,
    /// Name of the lemmatizer column
    pub lemmatizer: String,
    /// Name of the stemmer column
    pub stemmer: String,
    /// One row per input word, in input order
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Align `lemmas` and `stems` with `words`
    ///
    /// Fails with `AlignmentMismatch` if either result does not have exactly
    /// one form per word.
    pub fn build(
        words: &WordList,
        lemmas: &ReductionResult,
        stems: &ReductionResult,
    ) -> Result<Self> {
        let rows = align_rows(words, lemmas, stems)?;
        Ok(Self {
            language: words.language(),
            lemmatizer: lemmas.strategy().to_string(),
            stemmer: stems.strategy().to_string(),
            rows,
        })
    }

    /// Number of rows where lemma and stem are identical
    pub fn agreement_count(&self) -> usize {
        self.rows.iter().filter(|row| row.equal()).count()
    }

    /// Share of agreeing rows, `0.0` for an empty report
    pub fn agreement_ratio(&self) -> f64 {
        if self.rows.is_empty() {
            0.0
        } else {
            self.agreement_count() as f64 / self.rows.len() as f64
        }
    }

    /// Rows where the two strategies disagree
    pub fn divergent(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| !row.equal())
    }

    /// Render the fixed-width table
    pub fn render_table(&self) -> String {
        self.to_string()
    }
}

fn equality_marker(equal: bool) -> &'static str {
    if equal {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        let w = COLUMN_WIDTH;

        writeln!(f, "{} words:", self.language)?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<w$} {:<w$} {:<w$} {}",
            "word", self.lemmatizer, self.stemmer, EQUAL_HEADER
        )?;
        writeln!(f, "{rule}")?;

        // `{:<w$}` pads by char count, so Cyrillic columns line up
        for row in &self.rows {
            writeln!(
                f,
                "{:<w$} {:<w$} {:<w$} {}",
                row.word(),
                row.lemma(),
                row.stem(),
                equality_marker(row.equal())
            )?;
        }

        writeln!(f, "{rule}")?;
        write!(
            f,
            "agreement: {}/{} ({:.1}%)",
            self.agreement_count(),
            self.rows.len(),
            self.agreement_ratio() * 100.0
        )
    }
}
