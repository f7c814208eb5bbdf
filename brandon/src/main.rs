mod commands;
mod language;
mod telemetry;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    cli.run()
}
