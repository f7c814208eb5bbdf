use std::path::PathBuf;

use brandon_codegen::docs::{DocsGenerator, build_site};
use brandon_spec::SpecFile;
use clap::Args;
use eyre::Result;

use super::print_preview;
use crate::commands::UnwrapOrExit;

#[derive(Args)]
pub struct DocsCommand {
    /// Path to the spec file
    pub spec_file: PathBuf,

    /// Output directory
    #[arg(short, long, env = "BRANDON_OUTPUT_PATH", default_value = ".")]
    pub output_path: PathBuf,

    /// Run `mkdocs build` on the generated site
    #[arg(long)]
    pub build: bool,

    /// Preview generated files without writing to disk
    #[arg(long, conflicts_with = "build")]
    pub dry_run: bool,
}

impl DocsCommand {
    pub fn run(&self) -> Result<()> {
        let spec = SpecFile::open(&self.spec_file).unwrap_or_exit();
        let app = spec.application();
        let generator = DocsGenerator::new(app);

        if self.dry_run {
            print_preview(&generator.preview()?);
            return Ok(());
        }

        let root = generator.generate(&self.output_path)?;
        if self.build {
            build_site(&root)?;
        }

        println!(
            "Documentation folder for `{}` created successfully in `{}`",
            app.name,
            root.display()
        );

        Ok(())
    }
}
