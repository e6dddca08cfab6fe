//! Russian morphological analyzer
//!
//! Each word is analyzed on its own; the normal form of the best-ranked
//! parse becomes the lemma.

use super::lexicon::{Lexicon, Parse};
use morphdiff_core::{Language, Lemmatizer, ReductionResult, Result, WordList};
use std::sync::Arc;

/// Lexicon-backed Russian analyzer
#[derive(Debug, Clone)]
pub struct RussianAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl RussianAnalyzer {
    /// Create over a Russian lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Ranked parses of one word, best first
    pub fn parse(&self, word: &str) -> Vec<Parse> {
        self.lexicon.analyze(word)
    }
}

impl Lemmatizer for RussianAnalyzer {
    fn name(&self) -> &str {
        self.lexicon.name()
    }

    fn language(&self) -> Language {
        Language::Russian
    }

    fn lemmatize(&self, words: &WordList) -> Result<ReductionResult> {
        let forms = words
            .iter()
            .map(|word| self.lexicon.normal_form(word))
            .collect();
        let result = ReductionResult::new(self.name(), forms);
        result.ensure_aligned(words)?;
        Ok(result)
    }
}
