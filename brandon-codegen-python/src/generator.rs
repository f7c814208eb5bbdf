use std::path::{Path, PathBuf};

use brandon_codegen::{
    GenerateResult, PreviewFile, ProjectGenerator,
    paths::python::{CLI_DIR, TESTS_DIR},
};
use brandon_core::{GeneratedFile, WriteResult};
use brandon_spec::{Application, Language};
use eyre::Result;
use tracing::debug;

use crate::files::{GroupPy, InitPy, MainPy, PyprojectToml, Readme, SchemasPy, ScriptPy};

/// Python package generator producing a click-based CLI project.
///
/// The project lives in `<output>/<exec>-<version>/`.
pub struct Generator<'a> {
    app: &'a Application,
}

impl ProjectGenerator for Generator<'_> {
    fn language(&self) -> Language {
        Language::Python
    }

    fn project_root(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.root_name())
    }

    fn preview(&self) -> Vec<PreviewFile> {
        preview_files(&self.files(), Path::new(&self.root_name()))
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let root = self.project_root(output_dir);
        debug!(root = %root.display(), "generating python package");
        write_files(&self.files(), &root)
    }
}

impl<'a> Generator<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }

    fn root_name(&self) -> String {
        format!("{}-{}", self.app.exec, self.app.version)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        let app = self.app;
        let package = PathBuf::from(&app.exec);

        let mut files: Vec<Box<dyn GeneratedFile + 'a>> = vec![
            Box::new(InitPy::new(&package)),
            Box::new(InitPy::new(package.join(CLI_DIR))),
        ];
        for group in &app.cli.groups {
            files.push(Box::new(GroupPy::new(&app.exec, group)));
        }
        files.push(Box::new(MainPy::new(app)));
        files.push(Box::new(SchemasPy::new(app)));
        files.push(Box::new(Readme::new(app)));
        files.push(Box::new(PyprojectToml::new(app)));
        files.push(Box::new(InitPy::new(TESTS_DIR).if_missing()));

        files
    }
}

/// Single-file generator: the whole CLI in `<output>/<exec>.py`.
pub struct ScriptGenerator<'a> {
    app: &'a Application,
}

impl ProjectGenerator for ScriptGenerator<'_> {
    fn language(&self) -> Language {
        Language::PythonSingle
    }

    fn project_root(&self, output_dir: &Path) -> PathBuf {
        ScriptPy::new(self.app).path(output_dir)
    }

    fn preview(&self) -> Vec<PreviewFile> {
        preview_files(&self.files(), Path::new(""))
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        debug!(output = %output_dir.display(), "generating python script");
        write_files(&self.files(), output_dir)
    }
}

impl<'a> ScriptGenerator<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        vec![Box::new(ScriptPy::new(self.app))]
    }
}

fn preview_files(files: &[Box<dyn GeneratedFile + '_>], base: &Path) -> Vec<PreviewFile> {
    files
        .iter()
        .map(|file| PreviewFile {
            path: file.path(base).display().to_string(),
            content: file.render(),
        })
        .collect()
}

fn write_files(files: &[Box<dyn GeneratedFile + '_>], base: &Path) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();

    for file in files {
        let path = file.path(base);
        match file.write(base)? {
            WriteResult::Written => result.written.push(path),
            WriteResult::Skipped => result.skipped.push(path),
        }
    }

    Ok(result)
}
