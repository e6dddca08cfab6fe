//! Comparison pipeline and builder
//!
//! A [`Comparator`] owns one lemmatizer and one stemmer for a language and
//! turns word lists into [`ComparisonReport`]s. Both engines sit behind the
//! capability traits, so tests can swap in deterministic stubs.

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    lemmatizer::{self, LemmatizeMode, Lexicon},
    report::ComparisonReport,
    stemmer::SnowballStemmer,
};
use morphdiff_core::{Language, Lemmatizer, Stemmer, WordList};
use std::path::PathBuf;
use std::sync::Arc;

/// Lemmatizer-versus-stemmer comparison for one language
pub struct Comparator {
    language: Language,
    lemmatizer: Box<dyn Lemmatizer>,
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparator")
            .field("language", &self.language)
            .field("lemmatizer", &self.lemmatizer.name())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Comparator {
    /// Create a comparator with the built-in engines for `language`
    pub fn new(language: Language) -> Result<Self> {
        Self::with_config(EngineConfig::new(language))
    }

    /// Create a comparator for a language given by code
    pub fn with_language(code: &str) -> Result<Self> {
        Self::new(Language::from_code(code)?)
    }

    /// Create a comparator from configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            language: config.language,
            lemmatizer: build_lemmatizer(&config)?,
            stemmer: Box::new(SnowballStemmer::new(config.language)),
        })
    }

    /// Start a builder
    pub fn builder() -> ComparatorBuilder {
        ComparatorBuilder::new()
    }

    /// Language served by this comparator
    pub fn language(&self) -> Language {
        self.language
    }

    /// Name of the lemmatizer column
    pub fn lemmatizer_name(&self) -> &str {
        self.lemmatizer.name()
    }

    /// Name of the stemmer column
    pub fn stemmer_name(&self) -> &str {
        self.stemmer.name()
    }

    /// Lemmatize and stem `words`, then align the results into a report
    ///
    /// Each result is checked against the input before the reporter sees
    /// it; a misaligned result fails the whole batch.
    pub fn compare(&self, words: &WordList) -> Result<ComparisonReport> {
        if words.language() != self.language {
            return Err(EngineError::Config(format!(
                "word list is {}, comparator is {}",
                words.language(),
                self.language
            )));
        }

        log::info!(
            "comparing {} {} words: {} vs {}",
            words.len(),
            self.language,
            self.lemmatizer.name(),
            self.stemmer.name()
        );

        let lemmas = self.lemmatizer.lemmatize(words)?;
        lemmas.ensure_aligned(words)?;
        let stems = self.stemmer.stem(words)?;
        stems.ensure_aligned(words)?;

        let report = ComparisonReport::build(words, &lemmas, &stems)?;
        log::debug!(
            "{} of {} {} words agree",
            report.agreement_count(),
            report.rows.len(),
            self.language
        );
        Ok(report)
    }

    /// Compare raw words in this comparator's language
    pub fn compare_words<I, S>(&self, words: I) -> Result<ComparisonReport>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compare(&WordList::new(self.language, words))
    }
}

/// Built-in lemmatizer, or one over the configured lexicon file
///
/// A lexicon file for another language is rejected.
pub fn build_lemmatizer(config: &EngineConfig) -> Result<Box<dyn Lemmatizer>> {
    let Some(path) = &config.lexicon_path else {
        return lemmatizer::for_language(config.language, config.lemmatize_mode);
    };

    let lexicon = Lexicon::from_file(path)?;
    if lexicon.language() != config.language {
        return Err(EngineError::Config(format!(
            "lexicon {} is for {}, not {}",
            path.display(),
            lexicon.language(),
            config.language
        )));
    }
    log::info!("using lexicon {} ({} forms)", path.display(), lexicon.len());
    Ok(lemmatizer::from_lexicon(Arc::new(lexicon), config.lemmatize_mode))
}

/// Builder for [`Comparator`]
///
/// Custom engines given to the builder replace the built-in ones; they must
/// serve the builder's language.
pub struct ComparatorBuilder {
    config: EngineConfig,
    lemmatizer: Option<Box<dyn Lemmatizer>>,
    stemmer: Option<Box<dyn Stemmer>>,
}

impl Default for ComparatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparatorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            lemmatizer: None,
            stemmer: None,
        }
    }

    /// Set the language
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Set the English lemmatization mode
    pub fn lemmatize_mode(mut self, mode: LemmatizeMode) -> Self {
        self.config.lemmatize_mode = mode;
        self
    }

    /// Use a lexicon file instead of the embedded lexicon
    pub fn lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon_path = Some(path.into());
        self
    }

    /// Use a custom lemmatizer
    pub fn lemmatizer(mut self, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    /// Use a custom stemmer
    pub fn stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Build the comparator
    pub fn build(self) -> Result<Comparator> {
        let language = self.config.language;

        let lemmatizer: Box<dyn Lemmatizer> = match self.lemmatizer {
            Some(custom) => custom,
            None => build_lemmatizer(&self.config)?,
        };
        let stemmer: Box<dyn Stemmer> = match self.stemmer {
            Some(custom) => custom,
            None => Box::new(SnowballStemmer::new(language)),
        };

        for (kind, name, engine_language) in [
            ("lemmatizer", lemmatizer.name(), lemmatizer.language()),
            ("stemmer", stemmer.name(), stemmer.language()),
        ] {
            if engine_language != language {
                return Err(EngineError::Config(format!(
                    "{kind} '{name}' serves {engine_language}, not {language}"
                )));
            }
        }

        Ok(Comparator {
            language,
            lemmatizer,
            stemmer,
        })
    }
}
