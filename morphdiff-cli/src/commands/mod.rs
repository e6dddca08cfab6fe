//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Parser, Subcommand};
use morphdiff_engine::Language;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod compare;
pub mod demo;
pub mod generate_lexicon;
pub mod lemmatize;
pub mod stem;
pub mod validate;

/// Compare dictionary lemmatization with rule-based stemming
#[derive(Debug, Parser)]
#[command(name = "morphdiff", version, about)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "MORPHDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress diagnostics
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare both strategies on the built-in sample words
    Demo(demo::DemoArgs),

    /// Compare both strategies on your own words
    Compare(compare::CompareArgs),

    /// Stem words, one stem per line
    Stem(stem::StemArgs),

    /// Lemmatize words, one lemma per line
    Lemmatize(lemmatize::LemmatizeArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write a lexicon template
    GenerateLexicon(generate_lexicon::GenerateLexiconArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Demo(args) => args.execute(config),
            Commands::Compare(args) => args.execute(config),
            Commands::Stem(args) => args.execute(),
            Commands::Lemmatize(args) => args.execute(config),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateLexicon(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute(&mut io::stdout())?;
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            ListCommands::Languages => {
                for language in Language::ALL {
                    writeln!(out, "{:<4} {}", language.code(), language)?;
                }
            }
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    writeln!(out, "{}", format.as_str())?;
                }
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Resolve `--language`, falling back to the configured default
pub(crate) fn resolve_language(arg: Option<&str>, config: &CliConfig) -> Result<Language> {
    let code = arg.unwrap_or(&config.processing.default_language);
    Ok(Language::from_code(code)?)
}

/// Open the output file, or stdout when no path is given
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| {
                CliError::OutputError(format!("cannot create {}: {e}", path.display()))
            })?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
