//! Capability interfaces for the external normalization engines

use crate::error::Result;
use crate::language::Language;
use crate::types::{ReductionResult, WordList};

/// Dictionary or model based lemmatizer
pub trait Lemmatizer: Send + Sync {
    /// Get a human-readable name for this lemmatizer
    fn name(&self) -> &str;

    /// Language this lemmatizer was built for
    fn language(&self) -> Language;

    /// Produce one dictionary form per input word
    ///
    /// # Returns
    /// A result with exactly `words.len()` forms, or
    /// [`CoreError::AlignmentMismatch`](crate::CoreError::AlignmentMismatch)
    /// if the underlying engine re-segmented the input.
    fn lemmatize(&self, words: &WordList) -> Result<ReductionResult>;
}

/// Rule based affix-stripping stemmer
pub trait Stemmer: Send + Sync {
    /// Get a human-readable name for this stemmer
    fn name(&self) -> &str;

    /// Language this stemmer was built for
    fn language(&self) -> Language;

    /// Stem a single word
    ///
    /// Must be a pure function of `word`.
    fn stem_word(&self, word: &str) -> String;

    /// Stem every word of the list, preserving order and length
    fn stem(&self, words: &WordList) -> Result<ReductionResult> {
        let forms = words.iter().map(|word| self.stem_word(word)).collect();
        Ok(ReductionResult::new(self.name(), forms))
    }
}
