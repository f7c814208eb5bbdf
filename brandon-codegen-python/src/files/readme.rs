use std::path::{Path, PathBuf};

use brandon_codegen::paths::python::README_FILE;
use brandon_core::{FileRules, GeneratedFile};
use brandon_spec::Application;

/// Project README with the application name and description.
pub struct Readme<'a> {
    app: &'a Application,
}

impl<'a> Readme<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }
}

impl GeneratedFile for Readme<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(README_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        format!("# {}\n\n{}\n", self.app.name, self.app.description)
    }
}
