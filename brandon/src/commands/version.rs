use std::path::PathBuf;

use brandon_spec::SpecFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct VersionCommand {
    /// Path to the spec file
    #[arg(default_value = "cli.yml")]
    pub spec_file: PathBuf,
}

impl VersionCommand {
    pub fn run(&self) -> Result<()> {
        let spec = SpecFile::open(&self.spec_file).unwrap_or_exit();
        println!("{}", spec.application().version);
        Ok(())
    }
}
