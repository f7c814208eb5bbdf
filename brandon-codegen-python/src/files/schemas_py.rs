use std::path::{Path, PathBuf};

use brandon_codegen::paths::python::SCHEMAS_FILE;
use brandon_core::{FileRules, GeneratedFile};
use brandon_spec::Application;

use super::imports;
use crate::{PythonModule, click};

/// `<exec>/schemas.py`: one `Enum` class per enumeration.
pub struct SchemasPy<'a> {
    app: &'a Application,
}

impl<'a> SchemasPy<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }
}

impl GeneratedFile for SchemasPy<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.app.exec).join(SCHEMAS_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        PythonModule::new()
            .import(imports::enum_base())
            .add_all(self.app.schemas.enums.iter().map(click::enum_class))
            .render()
    }
}
