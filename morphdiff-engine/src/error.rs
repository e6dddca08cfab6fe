//! Layered error types
//!
//! Core conditions (unsupported language, misalignment) pass through
//! untouched; the engine adds failures of its own resources.

use morphdiff_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core condition (unsupported language, alignment mismatch)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Lexicon missing, unreadable or invalid
    #[error("lexicon error in {source_name}: {reason}")]
    Lexicon {
        /// File path, or the embedded lexicon's name
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Whether this error is an unsupported-language condition
    pub fn is_unsupported_language(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::UnsupportedLanguage { .. }))
    }

    /// Whether this error is an alignment mismatch
    pub fn is_alignment_mismatch(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::AlignmentMismatch { .. }))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
