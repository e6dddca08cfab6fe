//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Word file not found or inaccessible
    FileNotFound(String),
    /// Neither arguments nor an input file supplied any word
    NoWords,
    /// Configuration error
    ConfigError(String),
    /// Output could not be written
    OutputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::NoWords => write!(f, "No words to process"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.txt".to_string());
        assert_eq!(error.to_string(), "File not found: words.txt");
    }

    #[test]
    fn test_no_words_error_display() {
        assert_eq!(CliError::NoWords.to_string(), "No words to process");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_output_error_display() {
        let error = CliError::OutputError("broken pipe".to_string());
        assert_eq!(error.to_string(), "Output error: broken pipe");
    }

    #[test]
    fn test_error_converts_to_anyhow() {
        let failure: CliResult<()> = Err(CliError::NoWords.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_error_with_cyrillic_path() {
        let error = CliError::FileNotFound("слова/тест.txt".to_string());
        assert_eq!(error.to_string(), "File not found: слова/тест.txt");
    }
}
