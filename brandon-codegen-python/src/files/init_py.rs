use std::path::{Path, PathBuf};

use brandon_codegen::paths::python::INIT_FILE;
use brandon_core::{FileRules, GeneratedFile};

/// An empty `__init__.py` marking `dir` as a package.
pub struct InitPy {
    dir: PathBuf,
    rules: FileRules,
}

impl InitPy {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            rules: FileRules::always_overwrite(),
        }
    }

    /// Leave an existing file alone, for packages the user fills in.
    pub fn if_missing(mut self) -> Self {
        self.rules = FileRules::if_missing();
        self
    }
}

impl GeneratedFile for InitPy {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(INIT_FILE)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        String::new()
    }
}
