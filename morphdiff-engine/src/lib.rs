//! Lemmatizer and stemmer adapters for morphdiff
//!
//! This crate wires the external normalization engines into the
//! capability traits of `morphdiff-core` and runs the comparison:
//! Snowball stemmers for affix stripping, lexicon-backed analyzers for
//! lemmatization, and a reporter that aligns both with the input.
//!
//! ```rust
//! use morphdiff_engine::{Comparator, Language};
//!
//! let comparator = Comparator::new(Language::Russian).unwrap();
//! let report = comparator.compare_words(["мыши"]).unwrap();
//!
//! assert_eq!(report.rows[0].lemma(), "мышь");
//! assert_eq!(report.rows[0].stem(), "мыш");
//! assert!(!report.rows[0].equal());
//! ```

#![warn(missing_docs)]

pub mod comparator;
pub mod config;
pub mod dataset;
pub mod error;
pub mod lemmatizer;
pub mod report;
pub mod stemmer;

// Re-export key types
pub use comparator::{build_lemmatizer, Comparator, ComparatorBuilder};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use lemmatizer::{LemmatizeMode, Lexicon};
pub use report::ComparisonReport;
pub use stemmer::{stem_code, stem_code_lenient, SnowballStemmer};

// Re-export from core for convenience
pub use morphdiff_core::{ComparisonRow, CoreError, Language, ReductionResult, WordList};

/// Lemmatize raw words with the built-in lemmatizer for `language`
///
/// The result always has one lemma per word.
pub fn lemmatize<S: AsRef<str>>(words: &[S], language: Language) -> Result<Vec<String>> {
    let list = WordList::new(language, words.iter().map(|w| w.as_ref()));
    Ok(lemmatizer::lemmatize(&list)?.into_forms())
}

/// Stem raw words with the Snowball stemmer for `language`
///
/// The result always has one stem per word.
pub fn stem<S: AsRef<str>>(words: &[S], language: Language) -> Vec<String> {
    let list = WordList::new(language, words.iter().map(|w| w.as_ref()));
    stemmer::stem(&list).into_forms()
}

/// Compare the built-in lemmatizer and stemmer on a word list
pub fn compare(words: &WordList) -> Result<ComparisonReport> {
    Comparator::new(words.language())?.compare(words)
}
