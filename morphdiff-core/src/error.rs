//! Core error types

use thiserror::Error;

/// Errors raised by the comparison core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Language outside the supported set
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that was rejected
        code: String,
    },

    /// A result sequence no longer lines up with its input word list
    #[error("{strategy} produced {actual} results for {expected} words")]
    AlignmentMismatch {
        /// Name of the strategy that produced the misaligned sequence
        strategy: String,
        /// Length of the originating word list
        expected: usize,
        /// Length of the produced sequence
        actual: usize,
    },
}

impl CoreError {
    /// Shorthand for an unsupported language code
    pub fn unsupported(code: impl Into<String>) -> Self {
        CoreError::UnsupportedLanguage { code: code.into() }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
