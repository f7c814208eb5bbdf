mod docs;
mod project;
mod summary;

use clap::{Args, Subcommand};
use docs::DocsCommand;
use eyre::Result;
use project::ProjectCommand;
use summary::SummaryCommand;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(subcommand)]
    target: GenerateTarget,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        match &self.target {
            GenerateTarget::Project(cmd) => cmd.run(),
            GenerateTarget::Docs(cmd) => cmd.run(),
            GenerateTarget::Summary(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum GenerateTarget {
    /// Generate a project skeleton in a target language
    Project(ProjectCommand),

    /// Generate an MkDocs documentation site
    Docs(DocsCommand),

    /// Print a plaintext usage summary
    Summary(SummaryCommand),
}

/// Print previewed files the way `--dry-run` shows them.
fn print_preview(files: &[brandon_codegen::PreviewFile]) {
    for file in files {
        println!("── {} ──", file.path);
        println!("{}", file.content);
    }

    println!("── Summary ──");
    println!("{} files would be generated", files.len());
}
