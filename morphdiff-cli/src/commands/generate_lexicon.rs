//! Generate-lexicon command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use morphdiff_engine::Language;
use std::path::PathBuf;

/// Arguments for the generate-lexicon command
#[derive(Debug, Args)]
pub struct GenerateLexiconArgs {
    /// Language code (en, ru)
    #[arg(short, long)]
    pub language: String,

    /// Where to write the template
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

impl GenerateLexiconArgs {
    /// Write a lexicon template for the language
    pub fn execute(&self) -> Result<()> {
        let language = Language::from_code(&self.language)?;
        std::fs::write(&self.output, template(language)).map_err(|e| {
            CliError::OutputError(format!("cannot write {}: {e}", self.output.display()))
        })?;

        println!(
            "{} lexicon template written to {}",
            language,
            self.output.display()
        );
        Ok(())
    }
}

/// Lexicon template with one sample form
pub fn template(language: Language) -> String {
    let (form, normal_form, tag) = match language {
        Language::English => ("geese", "goose", "NOUN"),
        Language::Russian => ("люди", "человек", "NOUN"),
    };

    format!(
        r#"# {language} lexicon for morphdiff
#
# Each form maps to its parses. The highest score wins; ties keep file order.
# Words are lowercased before lookup unless `lowercase = false`.

[metadata]
code = "{code}"
name = "CustomLexicon"
lowercase = true

[forms]
"{form}" = [{{ normal_form = "{normal_form}", tag = "{tag}", score = 1.0 }}]
"#,
        code = language.code(),
    )
}
