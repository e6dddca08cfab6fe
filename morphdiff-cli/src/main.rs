//! morphdiff command-line entry point

use clap::Parser;
use morphdiff_cli::commands::{init_logging, Cli};
use morphdiff_cli::config::CliConfig;
use morphdiff_cli::CliResult;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    log::debug!("{config:?}");

    cli.command.execute(&config)
}
