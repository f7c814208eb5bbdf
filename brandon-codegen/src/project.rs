//! Overwrite-guarded project creation.

use std::path::{Path, PathBuf};

use eyre::Result;
use tracing::debug;

use crate::{
    Error,
    language::{GenerateResult, ProjectGenerator},
};

/// A project about to be generated by a language-specific generator.
pub struct Project<'a> {
    generator: Box<dyn ProjectGenerator + 'a>,
    overwrite: bool,
}

impl<'a> Project<'a> {
    pub fn new(generator: Box<dyn ProjectGenerator + 'a>) -> Self {
        Self {
            generator,
            overwrite: false,
        }
    }

    /// Allow writing into an existing project root.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn generator(&self) -> &dyn ProjectGenerator {
        self.generator.as_ref()
    }

    /// Where the project will be created inside `output_dir`.
    pub fn root(&self, output_dir: &Path) -> PathBuf {
        self.generator.project_root(output_dir)
    }

    /// Generate the project, refusing to touch an existing root unless
    /// overwriting was allowed.
    pub fn create(&self, output_dir: &Path) -> Result<GenerateResult> {
        let root = self.root(output_dir);
        if root.exists() && !self.overwrite {
            return Err(Error::AlreadyExists { path: root }.into());
        }

        debug!(
            language = %self.generator.language(),
            root = %root.display(),
            overwrite = self.overwrite,
            "generating project"
        );
        self.generator.generate(output_dir)
    }
}
