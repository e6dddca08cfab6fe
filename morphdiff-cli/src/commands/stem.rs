//! Stem command implementation

use anyhow::Result;
use clap::Args;
use morphdiff_engine::{stem_code, stem_code_lenient, ReductionResult};
use std::io::{self, Write};

/// Arguments for the stem command
#[derive(Debug, Args)]
pub struct StemArgs {
    /// Language code (en, ru)
    #[arg(short, long)]
    pub language: String,

    /// Words to stem
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Print nothing for an unsupported language instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl StemArgs {
    /// Stem the words and print one stem per line
    pub fn execute(&self) -> Result<()> {
        let result = self.run()?;
        write_forms(&mut io::stdout().lock(), &result)?;
        Ok(())
    }

    /// Stem the words without printing
    pub fn run(&self) -> Result<ReductionResult> {
        if self.lenient {
            Ok(stem_code_lenient(&self.words, &self.language))
        } else {
            Ok(stem_code(&self.words, &self.language)?)
        }
    }
}

/// Print each form on its own line
pub(crate) fn write_forms<W: Write>(out: &mut W, result: &ReductionResult) -> io::Result<()> {
    for form in result.forms() {
        writeln!(out, "{form}")?;
    }
    out.flush()
}
