//! Word input handling

use crate::error::CliError;
use anyhow::{Context, Result};
use std::path::Path;

/// Collect words from command-line arguments and an optional word file
///
/// The file is split on whitespace; its words follow the argument words.
pub fn collect_words(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut words: Vec<String> = args
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect();

    if let Some(path) = file {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let before = words.len();
        words.extend(content.split_whitespace().map(str::to_string));
        log::debug!("read {} words from {}", words.len() - before, path.display());
    }

    if words.is_empty() {
        return Err(CliError::NoWords.into());
    }
    Ok(words)
}
