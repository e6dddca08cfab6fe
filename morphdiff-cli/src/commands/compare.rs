//! Compare command implementation

use super::{open_output, resolve_language};
use crate::config::CliConfig;
use crate::input::collect_words;
use crate::output::{create_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use morphdiff_engine::{Comparator, EngineConfig, LemmatizeMode, WordList};
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Words to compare
    pub words: Vec<String>,

    /// Read more words from a file (whitespace separated)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Language code (en, ru); defaults to the configured language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Lexicon file replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Join English words into one text before lemmatizing
    #[arg(long)]
    pub batch: bool,
}

impl CompareArgs {
    /// Compare the given words and write one report
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let engine_config = self.engine_config(config)?;
        let words = collect_words(&self.words, self.input.as_deref())?;
        let words = WordList::new(engine_config.language, words);

        log::info!("comparing {} {} words", words.len(), words.language());
        let report = Comparator::with_config(engine_config)?.compare(&words)?;

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        formatter.format_report(&report)?;
        formatter.finish()
    }

    /// Merge the arguments over the configured defaults
    pub fn engine_config(&self, config: &CliConfig) -> Result<EngineConfig> {
        engine_config(
            self.language.as_deref(),
            self.lexicon.as_ref(),
            self.batch,
            config,
        )
    }
}

/// Engine configuration shared by the commands that lemmatize
pub(crate) fn engine_config(
    language: Option<&str>,
    lexicon: Option<&PathBuf>,
    batch: bool,
    config: &CliConfig,
) -> Result<EngineConfig> {
    let language = resolve_language(language, config)?;
    let lemmatize_mode = if batch {
        LemmatizeMode::JoinedBatch
    } else {
        config.processing.lemmatize_mode
    };
    let lexicon_path = lexicon.or(config.processing.lexicon.as_ref()).cloned();

    Ok(EngineConfig {
        language,
        lemmatize_mode,
        lexicon_path,
    })
}
