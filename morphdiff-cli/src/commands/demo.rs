//! Demo command implementation

use super::open_output;
use crate::config::CliConfig;
use crate::output::{create_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use morphdiff_engine::{dataset, Comparator, ComparisonReport};
use std::path::PathBuf;

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl DemoArgs {
    /// Compare both strategies on every built-in sample
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let reports = sample_reports()?;

        let format = self.format.unwrap_or(config.output.default_format);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for report in &reports {
            formatter.format_report(report)?;
        }
        formatter.finish()
    }
}

/// One report per built-in sample, English first
pub fn sample_reports() -> Result<Vec<ComparisonReport>> {
    dataset::samples()
        .iter()
        .map(|words| -> Result<ComparisonReport> {
            let comparator = Comparator::new(words.language())?;
            Ok(comparator.compare(words)?)
        })
        .collect()
}
