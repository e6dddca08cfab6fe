//! Configuration types for the engine

use crate::lemmatizer::LemmatizeMode;
use morphdiff_core::Language;
use std::path::PathBuf;

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Language of the word lists to compare
    pub language: Language,
    /// How English words reach the lexicon
    pub lemmatize_mode: LemmatizeMode,
    /// Lexicon file replacing the embedded one (None = embedded)
    pub lexicon_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            lemmatize_mode: LemmatizeMode::PerWord,
            lexicon_path: None,
        }
    }
}

impl EngineConfig {
    /// Default configuration for `language`
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Configuration that feeds English words through the joined-batch path
    pub fn joined_batch(language: Language) -> Self {
        Self {
            language,
            lemmatize_mode: LemmatizeMode::JoinedBatch,
            lexicon_path: None,
        }
    }
}
