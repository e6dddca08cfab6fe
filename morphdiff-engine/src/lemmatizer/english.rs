//! English lemmatizer
//!
//! Per-word mode looks each word up on its own. Joined-batch mode mimics a
//! text pipeline: the words are joined with spaces and re-tokenized before
//! lookup, which can split a caller's word into several tokens. The result
//! is validated against the input and a re-segmentation is reported as an
//! alignment mismatch.

use super::lexicon::Lexicon;
use super::LemmatizeMode;
use morphdiff_core::{CoreError, Language, Lemmatizer, ReductionResult, Result, WordList};
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Word tokens keep inner apostrophes; every other punctuation mark stands alone
const TOKEN_PATTERN: &str = r"\w+(?:'\w+)*|[^\w\s]";

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Split text the way the joined-batch pipeline sees it
pub fn tokenize(text: &str) -> Vec<&str> {
    token_regex().find_iter(text).map(|m| m.as_str()).collect()
}

/// Lexicon-backed English lemmatizer
#[derive(Debug, Clone)]
pub struct EnglishLemmatizer {
    lexicon: Arc<Lexicon>,
    mode: LemmatizeMode,
}

impl EnglishLemmatizer {
    /// Create over an English lexicon
    pub fn new(lexicon: Arc<Lexicon>, mode: LemmatizeMode) -> Self {
        Self { lexicon, mode }
    }

    /// Lemmatize the re-tokenized joined text
    ///
    /// Every word must come back as exactly one token; a matching total
    /// count is not enough.
    fn lemmatize_joined(&self, words: &WordList) -> Result<Vec<String>> {
        let joined = words.words().join(" ");
        let tokens = tokenize(&joined);

        if let Some(word) = words.iter().find(|word| tokenize(word).len() != 1) {
            log::debug!("joined batch re-segmented {word:?}");
            return Err(CoreError::AlignmentMismatch {
                strategy: self.name().to_string(),
                expected: words.len(),
                actual: tokens.len(),
            });
        }

        Ok(tokens
            .into_iter()
            .map(|token| self.lexicon.normal_form(token))
            .collect())
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn name(&self) -> &str {
        self.lexicon.name()
    }

    fn language(&self) -> Language {
        Language::English
    }

    fn lemmatize(&self, words: &WordList) -> Result<ReductionResult> {
        let forms = match self.mode {
            LemmatizeMode::PerWord => words
                .iter()
                .map(|word| self.lexicon.normal_form(word))
                .collect(),
            LemmatizeMode::JoinedBatch => self.lemmatize_joined(words)?,
        };

        let result = ReductionResult::new(self.name(), forms);
        result.ensure_aligned(words)?;
        Ok(result)
    }
}
