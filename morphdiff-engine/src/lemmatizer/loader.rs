//! Embedded lexicons with process-wide caching
//!
//! The built-in lexicons are parsed once, on first access, and shared as
//! `Arc<Lexicon>`. A `Lexicon` has no interior mutability, so every caller
//! sees the same answers no matter how many comparisons ran before.

use super::lexicon::Lexicon;
use crate::error::{EngineError, Result};
use morphdiff_core::Language;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

const ENGLISH_LEXICON: &str = include_str!("../../lexicons/english.toml");
const RUSSIAN_LEXICON: &str = include_str!("../../lexicons/russian.toml");

static EMBEDDED: OnceLock<HashMap<Language, Arc<Lexicon>>> = OnceLock::new();

/// Raw TOML of the built-in lexicon for `language`
pub fn embedded_source(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH_LEXICON,
        Language::Russian => RUSSIAN_LEXICON,
    }
}

/// Shared built-in lexicon for `language`
pub fn get_lexicon(language: Language) -> Result<Arc<Lexicon>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        for language in Language::ALL {
            let source_name = format!("embedded {} lexicon", language.code());
            match Lexicon::from_toml_str(&source_name, embedded_source(language)) {
                Ok(lexicon) => {
                    log::debug!("loaded {source_name} ({} forms)", lexicon.len());
                    map.insert(language, Arc::new(lexicon));
                }
                Err(e) => log::warn!("failed to load {source_name}: {e}"),
            }
        }
        map
    });

    embedded
        .get(&language)
        .cloned()
        .ok_or_else(|| EngineError::Lexicon {
            source_name: format!("embedded {} lexicon", language.code()),
            reason: "not available".to_string(),
        })
}
