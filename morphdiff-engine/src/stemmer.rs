//! Stemming dispatch over the Snowball stemmers
//!
//! English uses Porter2, the Snowball revision of the Porter cascade;
//! Russian uses the Snowball Russian stemmer. Both are stateless: every call
//! is a pure function of the word.

use crate::error::Result;
use morphdiff_core::{Language, ReductionResult, Stemmer, WordList};
use rust_stemmers::{Algorithm, Stemmer as SnowballEngine};

/// Affix-stripping stemmer for one supported language
pub struct SnowballStemmer {
    language: Language,
    engine: SnowballEngine,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl SnowballStemmer {
    /// Create the stemmer for `language`
    pub fn new(language: Language) -> Self {
        Self {
            language,
            engine: SnowballEngine::create(algorithm(language)),
        }
    }
}

fn algorithm(language: Language) -> Algorithm {
    match language {
        Language::English => Algorithm::English,
        Language::Russian => Algorithm::Russian,
    }
}

/// Column name used for a language's stemmer in reports
///
/// English runs Porter2, not the classic Porter rules, and is named so.
pub fn stemmer_name(language: Language) -> &'static str {
    match language {
        Language::English => "Porter2Stemmer",
        Language::Russian => "SnowballStemmer",
    }
}

impl Stemmer for SnowballStemmer {
    fn name(&self) -> &str {
        stemmer_name(self.language)
    }

    fn language(&self) -> Language {
        self.language
    }

    fn stem_word(&self, word: &str) -> String {
        // Snowball rules are written against lowercase input
        let lower = word.to_lowercase();
        self.engine.stem(&lower).into_owned()
    }
}

/// Stem a word list with the stemmer of its own language
pub fn stem(words: &WordList) -> ReductionResult {
    let stemmer = SnowballStemmer::new(words.language());
    let forms = words.iter().map(|w| stemmer.stem_word(w)).collect();
    ReductionResult::new(stemmer.name(), forms)
}

/// Stem raw words for a language given by code
///
/// Fails with `UnsupportedLanguage` for any code outside the supported set.
pub fn stem_code<S: AsRef<str>>(words: &[S], code: &str) -> Result<ReductionResult> {
    let language = Language::from_code(code)?;
    let list = WordList::new(language, words.iter().map(|w| w.as_ref()));
    Ok(stem(&list))
}

/// Stem raw words, reporting an unsupported language instead of failing
///
/// An unsupported code emits a warning and yields an empty result, so the
/// caller cannot tell it apart from an empty input. Prefer [`stem_code`].
pub fn stem_code_lenient<S: AsRef<str>>(words: &[S], code: &str) -> ReductionResult {
    match stem_code(words, code) {
        Ok(result) => result,
        Err(err) => {
            log::warn!("{err}; empty stem list returned");
            ReductionResult::new("unsupported", Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_porter_stems() {
        let result = stem_code(&["running", "jumped"], "en").unwrap();
        assert_eq!(result.forms(), &["run", "jump"]);
        assert_eq!(result.strategy(), "Porter2Stemmer");
    }

    #[test]
    fn test_english_follows_porter2_rules() {
        // Classic Porter gives "fairli" and "gener"
        let result = stem_code(&["fairly", "generously"], "en").unwrap();
        assert_eq!(result.forms(), &["fair", "generous"]);
    }

    #[test]
    fn test_english_stems_are_lowercase() {
        let result = stem_code(&["Running", "STUDIES"], "english").unwrap();
        assert_eq!(result.forms(), &["run", "studi"]);
    }

    #[test]
    fn test_russian_stems() {
        let result = stem_code(&["мыши"], "ru").unwrap();
        assert_eq!(result.forms(), &["мыш"]);
        assert_eq!(result.strategy(), "SnowballStemmer");
    }

    #[test]
    fn test_unsupported_code_is_typed_failure() {
        let err = stem_code(&["word"], "fr").unwrap_err();
        assert!(err.is_unsupported_language());
    }

    #[test]
    fn test_unsupported_code_lenient_is_empty() {
        let result = stem_code_lenient(&["word"], "fr");
        assert!(result.is_empty());
    }

    #[test]
    fn test_stemming_is_idempotent_across_calls() {
        let words = WordList::new(Language::Russian, ["бежавший", "стоял", "учусь"]);
        assert_eq!(stem(&words), stem(&words));
    }
}
