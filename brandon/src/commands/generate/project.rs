use std::path::PathBuf;

use brandon_codegen::{Error, Project};
use brandon_spec::SpecFile;
use clap::Args;
use eyre::{Context, Result};
use tracing::warn;

use super::print_preview;
use crate::{commands::UnwrapOrExit, language::LanguageSupport};

#[derive(Args)]
pub struct ProjectCommand {
    /// Path to the spec file
    pub spec_file: PathBuf,

    /// Overwrite an existing project folder
    #[arg(short = 'f', long)]
    pub overwrite: bool,

    /// Target language (defaults to the first entry of `languages` in the spec)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output directory
    #[arg(short, long, env = "BRANDON_OUTPUT_PATH", default_value = ".")]
    pub output_path: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ProjectCommand {
    pub fn run(&self) -> Result<()> {
        let spec = SpecFile::open(&self.spec_file).unwrap_or_exit();
        let app = spec.application();

        let language = match &self.language {
            Some(language) => language.as_str(),
            None => {
                let language = app.default_language().ok_or(Error::NoLanguage)?;
                warn!(language, "no --language given, using the first language of the spec");
                language
            }
        };
        let support = LanguageSupport::from_name(language)?;
        let project = Project::new(support.generator(app)).overwrite(self.overwrite);

        if self.dry_run {
            print_preview(&project.generator().preview());
            return Ok(());
        }

        let result = project
            .create(&self.output_path)
            .wrap_err_with(|| format!("Failed to generate {}", support.layout))?;

        println!(
            "Project folder for `{}` created successfully in `{}`",
            app.name,
            project.root(&self.output_path).display()
        );
        for path in &result.skipped {
            println!("  kept existing {}", path.display());
        }

        Ok(())
    }
}
