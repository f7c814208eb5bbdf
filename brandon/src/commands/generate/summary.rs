use std::path::PathBuf;

use brandon_codegen::summary::summary;
use brandon_spec::SpecFile;
use clap::Args;
use eyre::Result;

use crate::commands::UnwrapOrExit;

#[derive(Args)]
pub struct SummaryCommand {
    /// Path to the spec file
    pub spec_file: PathBuf,
}

impl SummaryCommand {
    pub fn run(&self) -> Result<()> {
        let spec = SpecFile::open(&self.spec_file).unwrap_or_exit();
        println!("{}", summary(spec.application()));
        Ok(())
    }
}
