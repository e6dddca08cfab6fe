//! Dictionary-based lemmatizers
//!
//! Both languages are served from a [`Lexicon`]: the embedded one by
//! default, or one loaded from a file.

pub mod english;
pub mod lexicon;
pub mod loader;
pub mod russian;

pub use english::EnglishLemmatizer;
pub use lexicon::{Lexicon, LexiconConfig, Parse};
pub use loader::{embedded_source, get_lexicon};
pub use russian::RussianAnalyzer;

use crate::error::Result;
use morphdiff_core::{Language, Lemmatizer, ReductionResult, WordList};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How English words reach the lexicon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LemmatizeMode {
    /// Look every word up on its own
    #[default]
    PerWord,
    /// Join the words into one text and re-tokenize it first
    JoinedBatch,
}

/// Wrap a lexicon in the lemmatizer for its language
///
/// Russian analysis is always per word, so `mode` only affects English.
pub fn from_lexicon(lexicon: Arc<Lexicon>, mode: LemmatizeMode) -> Box<dyn Lemmatizer> {
    match lexicon.language() {
        Language::English => Box::new(EnglishLemmatizer::new(lexicon, mode)),
        Language::Russian => Box::new(RussianAnalyzer::new(lexicon)),
    }
}

/// Built-in lemmatizer for `language`
pub fn for_language(language: Language, mode: LemmatizeMode) -> Result<Box<dyn Lemmatizer>> {
    Ok(from_lexicon(get_lexicon(language)?, mode))
}

/// Lemmatize a word list with the built-in lemmatizer of its language
pub fn lemmatize(words: &WordList) -> Result<ReductionResult> {
    let lemmatizer = for_language(words.language(), LemmatizeMode::PerWord)?;
    Ok(lemmatizer.lemmatize(words)?)
}
