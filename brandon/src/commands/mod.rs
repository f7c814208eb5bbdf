mod completions;
mod generate;
mod version;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use version::VersionCommand;

/// Extension trait for exiting on spec errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for brandon_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "brandon")]
#[command(version)]
#[command(about = "Generate CLI projects, documentation and summaries from a spec document")]
pub(crate) struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Version(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a project, documentation or a summary from a spec file
    Generate(GenerateCommand),

    /// Print the application version declared in a spec file
    Version(VersionCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
