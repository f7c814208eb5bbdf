use std::path::{Path, PathBuf};

use brandon_codegen::paths::python::{PYPROJECT_FILE, README_FILE};
use brandon_core::{FileRules, GeneratedFile};
use brandon_spec::{Application, Author};

use crate::click::ROOT_GROUP;

const PYTHON_VERSION: &str = "^3.8";
const CLICK_VERSION: &str = "8.1.3";

/// Poetry project metadata with the console script entry point.
pub struct PyprojectToml<'a> {
    app: &'a Application,
}

impl<'a> PyprojectToml<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }
}

impl GeneratedFile for PyprojectToml<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(PYPROJECT_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        let app = self.app;
        let authors: Vec<String> = app.authors.iter().map(author).collect();

        let mut out = format!(
            "[tool.poetry]\nname = {}\nversion = {}\ndescription = {}\nauthors = {}\nreadme = {}\n",
            quoted(&app.exec),
            quoted(&app.version),
            quoted(&app.description),
            array(&authors),
            quoted(README_FILE),
        );
        if let Some(license) = &app.license {
            out.push_str(&format!("license = {}\n", quoted(license)));
        }
        if let Some(url) = &app.url {
            out.push_str(&format!("homepage = {}\n", quoted(url)));
        }
        if !app.tags.is_empty() {
            out.push_str(&format!("keywords = {}\n", array(&app.tags)));
        }

        out.push_str(&format!(
            r#"
[tool.poetry.dependencies]
python = "{PYTHON_VERSION}"
click = "{CLICK_VERSION}"

[tool.poetry.scripts]
{} = {}

[build-system]
requires = ["poetry-core"]
build-backend = "poetry.core.masonry.api"
"#,
            app.exec,
            quoted(&format!("{}.main:{ROOT_GROUP}", app.exec)),
        ));

        out
    }
}

fn author(author: &Author) -> String {
    match &author.email {
        Some(email) => format!("{} <{}>", author.name, email),
        None => author.name.clone(),
    }
}

fn quoted(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

fn array(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|s| quoted(s)).collect();
    format!("[{}]", items.join(", "))
}
