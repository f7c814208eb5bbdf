use std::path::{Path, PathBuf};

use brandon_codegen::paths::python::{CLI_DIR, FILE_EXTENSION};
use brandon_core::{FileRules, GeneratedFile};
use brandon_spec::Group;

use super::imports;
use crate::{PYTHON_NAMING, PythonModule, click};

/// `<exec>/cli/<group>.py`: the click group and its command handlers.
pub struct GroupPy<'a> {
    exec: &'a str,
    group: &'a Group,
}

impl<'a> GroupPy<'a> {
    pub fn new(exec: &'a str, group: &'a Group) -> Self {
        Self { exec, group }
    }

    /// Module name of the group inside the `cli` package.
    pub fn module_name(group: &Group) -> String {
        PYTHON_NAMING.safe_name(&group.name)
    }
}

impl GeneratedFile for GroupPy<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.exec)
            .join(CLI_DIR)
            .join(format!("{}.{}", Self::module_name(self.group), FILE_EXTENSION))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let owner = click::group_function_name(self.group);

        PythonModule::new()
            .import(imports::click())
            .add(click::group_function(self.group))
            .add_all(
                self.group
                    .commands
                    .iter()
                    .map(|command| click::command_function(&owner, command)),
            )
            .render()
    }
}
