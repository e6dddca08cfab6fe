//! Lexicon schema and runtime table
//!
//! A lexicon is a TOML file mapping surface forms to ranked parses:
//!
//! ```toml
//! [metadata]
//! code = "ru"
//! name = "MorphAnalyzer"
//! lowercase = true
//!
//! [forms]
//! "мыши" = [
//!     { normal_form = "мышь", tag = "NOUN,anim,femn sing,gent", score = 0.4 },
//!     { normal_form = "мышь", tag = "NOUN,anim,femn plur,nomn", score = 0.35 },
//! ]
//! ```

use crate::error::{EngineError, Result};
use morphdiff_core::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Tag given to the fallback parse of an unknown word
pub const UNKNOWN_TAG: &str = "UNKN";

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Language and naming
    pub metadata: Metadata,
    /// Surface form to parses
    #[serde(default)]
    pub forms: HashMap<String, Vec<ParseEntry>>,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language code (`en` or `ru`)
    pub code: String,
    /// Lemmatizer name shown in reports
    pub name: String,
    /// Fold words to lowercase before lookup
    #[serde(default = "default_true")]
    pub lowercase: bool,
}

fn default_true() -> bool {
    true
}

/// One parse as written in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseEntry {
    /// Dictionary form
    pub normal_form: String,
    /// Grammatical tag
    #[serde(default)]
    pub tag: String,
    /// Likelihood score, higher is better
    #[serde(default = "default_score")]
    pub score: f64,
}

fn default_score() -> f64 {
    1.0
}

impl LexiconConfig {
    /// Parse a lexicon from TOML text
    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EngineError::Lexicon {
            source_name: source_name.to_string(),
            reason: format!("failed to parse TOML: {e}"),
        })
    }

    /// Check the configuration and resolve its language
    pub fn validate(&self) -> std::result::Result<Language, String> {
        if self.metadata.code.trim().is_empty() {
            return Err("empty language code".to_string());
        }
        let language = Language::from_code(&self.metadata.code).map_err(|e| e.to_string())?;

        if self.metadata.name.trim().is_empty() {
            return Err("empty lexicon name".to_string());
        }

        // Folded keys must be unique
        let mut folded: HashMap<String, &str> = HashMap::with_capacity(self.forms.len());
        for (form, parses) in &self.forms {
            if form.trim().is_empty() {
                return Err("empty surface form".to_string());
            }
            if self.metadata.lowercase {
                if let Some(other) = folded.insert(form.to_lowercase(), form) {
                    let (a, b) = if other < form.as_str() {
                        (other, form.as_str())
                    } else {
                        (form.as_str(), other)
                    };
                    return Err(format!("forms '{a}' and '{b}' collide when lowercased"));
                }
            }
            if parses.is_empty() {
                return Err(format!("form '{form}' has no parses"));
            }
            for parse in parses {
                if parse.normal_form.trim().is_empty() {
                    return Err(format!("form '{form}' has an empty normal form"));
                }
                if !parse.score.is_finite() {
                    return Err(format!("form '{form}' has a non-finite score"));
                }
            }
        }

        Ok(language)
    }
}

/// A single analyzer hypothesis for a word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parse {
    /// Dictionary form
    pub normal_form: String,
    /// Grammatical tag
    pub tag: String,
    /// Likelihood score, higher is better
    pub score: f64,
}

impl From<&ParseEntry> for Parse {
    fn from(entry: &ParseEntry) -> Self {
        Self {
            normal_form: entry.normal_form.clone(),
            tag: entry.tag.clone(),
            score: entry.score,
        }
    }
}

/// Immutable lookup table built from a validated [`LexiconConfig`]
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: Language,
    name: String,
    lowercase: bool,
    /// Parses per form, best first
    forms: HashMap<String, Vec<Parse>>,
}

impl Lexicon {
    /// Build from a configuration
    pub fn from_config(source_name: &str, config: &LexiconConfig) -> Result<Self> {
        let language = config.validate().map_err(|reason| EngineError::Lexicon {
            source_name: source_name.to_string(),
            reason,
        })?;
        let lowercase = config.metadata.lowercase;

        let mut forms: HashMap<String, Vec<Parse>> = HashMap::with_capacity(config.forms.len());
        for (form, entries) in &config.forms {
            let key = if lowercase {
                form.to_lowercase()
            } else {
                form.clone()
            };
            let mut parses: Vec<Parse> = entries.iter().map(Parse::from).collect();
            // Stable: equal scores keep file order
            parses.sort_by(|a, b| b.score.total_cmp(&a.score));
            forms.insert(key, parses);
        }

        Ok(Self {
            language,
            name: config.metadata.name.clone(),
            lowercase,
            forms,
        })
    }

    /// Parse and build from TOML text
    pub fn from_toml_str(source_name: &str, content: &str) -> Result<Self> {
        let config = LexiconConfig::from_toml_str(source_name, content)?;
        Self::from_config(source_name, &config)
    }

    /// Load from a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Lexicon {
            source_name: source_name.clone(),
            reason: format!("failed to read file: {e}"),
        })?;
        Self::from_toml_str(&source_name, &content)
    }

    /// Language the lexicon describes
    pub fn language(&self) -> Language {
        self.language
    }

    /// Name reported in comparison tables
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct surface forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the lexicon has no forms
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    fn key(&self, word: &str) -> String {
        if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }

    /// Whether `word` has an entry
    pub fn contains(&self, word: &str) -> bool {
        self.forms.contains_key(&self.key(word))
    }

    /// All parses of `word`, best first
    ///
    /// Unknown words yield one parse whose normal form is the folded word
    /// itself, so the result is never empty.
    pub fn analyze(&self, word: &str) -> Vec<Parse> {
        let key = self.key(word);
        match self.forms.get(&key) {
            Some(parses) => parses.clone(),
            None => vec![Parse {
                normal_form: key,
                tag: UNKNOWN_TAG.to_string(),
                score: 0.0,
            }],
        }
    }

    /// Normal form of the best parse of `word`
    pub fn normal_form(&self, word: &str) -> String {
        let key = self.key(word);
        match self.forms.get(&key).and_then(|parses| parses.first()) {
            Some(best) => best.normal_form.clone(),
            None => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[metadata]
code = "en"
name = "Sample"

[forms]
mice = [{ normal_form = "mouse", tag = "NOUN", score = 1.0 }]
saw = [
    { normal_form = "saw", tag = "NOUN", score = 0.2 },
    { normal_form = "see", tag = "VERB", score = 0.8 },
]
Tie = [
    { normal_form = "first", score = 0.5 },
    { normal_form = "second", score = 0.5 },
]
"#;

    #[test]
    fn test_parses_are_ranked_by_score() {
        let lexicon = Lexicon::from_toml_str("sample", SAMPLE).unwrap();
        let parses = lexicon.analyze("saw");
        assert_eq!(parses.len(), 2);
        assert_eq!(parses[0].normal_form, "see");
        assert_eq!(parses[1].normal_form, "saw");
        assert_eq!(lexicon.normal_form("saw"), "see");
    }

    #[test]
    fn test_ties_keep_file_order() {
        let lexicon = Lexicon::from_toml_str("sample", SAMPLE).unwrap();
        assert_eq!(lexicon.normal_form("tie"), "first");
    }

    #[test]
    fn test_lookup_is_case_folded() {
        let lexicon = Lexicon::from_toml_str("sample", SAMPLE).unwrap();
        assert!(lexicon.contains("MICE"));
        assert_eq!(lexicon.normal_form("Mice"), "mouse");
        assert_eq!(lexicon.language(), Language::English);
        assert_eq!(lexicon.name(), "Sample");
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn test_unknown_word_is_its_own_lemma() {
        let lexicon = Lexicon::from_toml_str("sample", SAMPLE).unwrap();
        let parses = lexicon.analyze("Zebras");
        assert_eq!(parses.len(), 1);
        assert_eq!(parses[0].normal_form, "zebras");
        assert_eq!(parses[0].tag, UNKNOWN_TAG);
        assert_eq!(lexicon.normal_form("Zebras"), "zebras");
    }

    #[test]
    fn test_case_sensitive_lexicon() {
        let content = r#"
[metadata]
code = "en"
name = "Cased"
lowercase = false

[forms]
US = [{ normal_form = "US" }]
"#;
        let lexicon = Lexicon::from_toml_str("cased", content).unwrap();
        assert_eq!(lexicon.normal_form("US"), "US");
        assert_eq!(lexicon.normal_form("Us"), "Us");
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let cases = [
            (r#"[metadata]
code = ""
name = "x""#, "empty language code"),
            (r#"[metadata]
code = "fr"
name = "x""#, "not supported"),
            (r#"[metadata]
code = "en"
name = " ""#, "empty lexicon name"),
            (r#"[metadata]
code = "en"
name = "x"
[forms]
a = []"#, "no parses"),
            (r#"[metadata]
code = "en"
name = "x"
[forms]
a = [{ normal_form = "" }]"#, "empty normal form"),
            (r#"[metadata]
code = "en"
name = "x"
[forms]
a = [{ normal_form = "a", score = nan }]"#, "non-finite score"),
        ];

        for (content, expected) in cases {
            let err = Lexicon::from_toml_str("bad", content).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "expected '{expected}' in '{err}'"
            );
        }
    }

    #[test]
    fn test_case_colliding_forms_are_rejected() {
        let content = r#"
[metadata]
code = "en"
name = "Colliding"

[forms]
Saw = [{ normal_form = "first", score = 0.5 }]
saw = [{ normal_form = "second", score = 0.5 }]
"#;
        for _ in 0..20 {
            let err = Lexicon::from_toml_str("colliding", content).unwrap_err();
            assert!(
                err.to_string()
                    .contains("forms 'Saw' and 'saw' collide when lowercased"),
                "{err}"
            );
        }
    }

    #[test]
    fn test_case_variants_allowed_without_folding() {
        let content = r#"
[metadata]
code = "en"
name = "Cased"
lowercase = false

[forms]
Saw = [{ normal_form = "first" }]
saw = [{ normal_form = "second" }]
"#;
        let lexicon = Lexicon::from_toml_str("cased", content).unwrap();
        assert_eq!(lexicon.normal_form("Saw"), "first");
        assert_eq!(lexicon.normal_form("saw"), "second");
    }

    #[test]
    fn test_invalid_toml_is_lexicon_error() {
        let err = Lexicon::from_toml_str("broken.toml", "[metadata").unwrap_err();
        assert!(matches!(err, EngineError::Lexicon { ref source_name, .. } if source_name == "broken.toml"));
    }

    #[test]
    fn test_missing_file_is_lexicon_error() {
        let err = Lexicon::from_file(Path::new("/nonexistent/lexicon.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }
}
