use std::path::{Path, PathBuf};

use brandon_codegen::paths::python::{CLI_DIR, MAIN_FILE};
use brandon_core::{FileRules, GeneratedFile};
use brandon_spec::Application;

use super::{GroupPy, imports};
use crate::{Import, PythonModule, ast::MainGuard, click};

/// `<exec>/main.py`: the root group, ungrouped handlers and the group
/// registrations.
pub struct MainPy<'a> {
    app: &'a Application,
}

impl<'a> MainPy<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }
}

impl GeneratedFile for MainPy<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.app.exec).join(MAIN_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let cli = &self.app.cli;

        let mut module = PythonModule::new().import(imports::click());
        for group in &cli.groups {
            module = module.import(Import::new(format!(
                "{}.{}.{}.{}",
                self.app.exec,
                CLI_DIR,
                GroupPy::module_name(group),
                click::group_function_name(group)
            )));
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
