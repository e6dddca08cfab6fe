//! Word lists, reduction results and comparison rows

use crate::error::{CoreError, Result};
use crate::language::Language;

/// Ordered batch of words sharing one language
///
/// Position `i` of the list corresponds to position `i` of every
/// [`ReductionResult`] derived from it. The list is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordList {
    language: Language,
    words: Vec<String>,
}

impl WordList {
    /// Create a word list from any iterator of words
    pub fn new<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Split free text on whitespace into a word list
    pub fn from_text(language: Language, text: &str) -> Self {
        Self::new(language, text.split_whitespace())
    }

    /// Language of the batch
    pub fn language(&self) -> Language {
        self.language
    }

    /// Words in input order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Output of one normalization strategy applied to a [`WordList`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionResult {
    strategy: String,
    forms: Vec<String>,
}

impl ReductionResult {
    /// Wrap the forms produced by `strategy`
    pub fn new(strategy: impl Into<String>, forms: Vec<String>) -> Self {
        Self {
            strategy: strategy.into(),
            forms,
        }
    }

    /// Name of the strategy that produced the forms
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Produced forms in input order
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// Number of produced forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether no forms were produced
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Take ownership of the forms
    pub fn into_forms(self) -> Vec<String> {
        self.forms
    }

    /// Fail with [`CoreError::AlignmentMismatch`] unless this result has
    /// exactly one form per word of `words`
    pub fn ensure_aligned(&self, words: &WordList) -> Result<()> {
        check_alignment(&self.strategy, words.len(), self.forms.len())
    }
}

/// Compare an expected and an actual sequence length
pub fn check_alignment(strategy: &str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CoreError::AlignmentMismatch {
            strategy: strategy.to_string(),
            expected,
            actual,
        })
    }
}

/// One line of a comparison report
///
/// Fields are read-only so `equal` always matches the two forms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonRow {
    word: String,
    lemma: String,
    stem: String,
    equal: bool,
}

impl ComparisonRow {
    /// Build a row, deriving `equal` from the two forms
    pub fn new(word: impl Into<String>, lemma: impl Into<String>, stem: impl Into<String>) -> Self {
        let lemma = lemma.into();
        let stem = stem.into();
        let equal = lemma == stem;
        Self {
            word: word.into(),
            lemma,
            stem,
            equal,
        }
    }

    /// Original word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Dictionary form chosen by the lemmatizer
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Affix-stripped form produced by the stemmer
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Exact byte equality of the lemma and the stem
    pub fn equal(&self) -> bool {
        self.equal
    }
}
