use std::path::{Path, PathBuf};

use brandon_codegen::paths::python::FILE_EXTENSION;
use brandon_core::{FileRules, GeneratedFile};
use brandon_spec::Application;

use super::imports;
use crate::{PythonModule, ast::MainGuard, click};

/// `<exec>.py`: the whole CLI in a single script.
///
/// Enumerations come first, then each group with its handlers, the root
/// group with the ungrouped handlers, the group registrations and the main
/// guard.
pub struct ScriptPy<'a> {
    app: &'a Application,
}

impl<'a> ScriptPy<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }

    pub fn file_name(app: &Application) -> String {
        format!("{}.{}", app.exec, FILE_EXTENSION)
    }
}

impl GeneratedFile for ScriptPy<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::file_name(self.app))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let app = self.app;
        let cli = &app.cli;

        let mut module = PythonModule::new().import(imports::click());
        if !app.schemas.is_empty() {
            module = module.import(imports::enum_base());
        }
        module = module.add_all(app.schemas.enums.iter().map(click::enum_class));

        for group in &cli.groups {
            let owner = click::group_function_name(group);
            module = module.add(click::group_function(group)).add_all(
                group
                    .commands
                    .iter()
                    .map(|command| click::command_function(&owner, command)),
            );
        }

        module = module.add(click::root_function()).add_all(
            cli.commands
                .iter()
                .map(|command| click::command_function(click::ROOT_GROUP, command)),
        );
        if !cli.groups.is_empty() {
            module = module.add(click::add_group_commands(&cli.groups));
        }

        module.add(MainGuard::new(click::ROOT_GROUP)).render()
    }
}
