//! Lemmatize command implementation

use super::compare::engine_config;
use super::stem::write_forms;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use morphdiff_engine::{build_lemmatizer, ReductionResult, WordList};
use std::io;
use std::path::PathBuf;

/// Arguments for the lemmatize command
#[derive(Debug, Args)]
pub struct LemmatizeArgs {
    /// Language code (en, ru); defaults to the configured language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Words to lemmatize
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Lexicon file replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Join English words into one text before lemmatizing
    #[arg(long)]
    pub batch: bool,
}

impl LemmatizeArgs {
    /// Lemmatize the words and print one lemma per line
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let result = self.run(config)?;
        write_forms(&mut io::stdout().lock(), &result)?;
        Ok(())
    }

    /// Lemmatize the words without printing
    pub fn run(&self, config: &CliConfig) -> Result<ReductionResult> {
        let engine_config = engine_config(
            self.language.as_deref(),
            self.lexicon.as_ref(),
            self.batch,
            config,
        )?;
        let words = WordList::new(engine_config.language, self.words.iter().map(String::as_str));
        let lemmatizer = build_lemmatizer(&engine_config)?;
        log::debug!("lemmatizing {} words with {}", words.len(), lemmatizer.name());

        let result = lemmatizer.lemmatize(&words)?;
        result.ensure_aligned(&words)?;
        Ok(result)
    }
}
