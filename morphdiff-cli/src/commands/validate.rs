//! Validate command implementation

use anyhow::Result;
use clap::Args;
use morphdiff_engine::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Lexicon file to validate
    #[arg(long, value_name = "FILE")]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Load the lexicon and report whether it is usable
    pub fn execute(&self) -> Result<()> {
        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Language: {}", lexicon.language());
                println!("  Name: {}", lexicon.name());
                println!("  Forms: {}", lexicon.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                Err(e.into())
            }
        }
    }
}
