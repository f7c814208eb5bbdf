//! MkDocs documentation site generation.
//!
//! The site lives in `<output>/<exec>-docs/`:
//!
//! ```text
//! mkdocs.yml
//! docs/index.md
//! docs/reference/<group>/<command>.md
//! docs/reference/<command>.md
//! docs/reference/enums.md
//! ```

mod icons;
mod mkdocs;
mod pages;

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use brandon_core::{File, GeneratedFile};
use brandon_spec::Application;
use eyre::{Result, WrapErr};
use tracing::{debug, info};

pub use icons::Icon;
pub use mkdocs::{MkDocsConfig, NavItem, NavTarget, Theme};
pub use pages::{command_page, enums_page, index_page};

use crate::{
    Error,
    language::PreviewFile,
    paths::docs::{CONFIG_FILE, ENUMS_PAGE, INDEX_PAGE, PAGES_DIR, REFERENCE_DIR, ROOT_SUFFIX},
};

/// Generator for the documentation site of an application.
pub struct DocsGenerator<'a> {
    app: &'a Application,
}

impl<'a> DocsGenerator<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }

    /// The site directory inside `output_dir`.
    pub fn root(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}{}", self.app.exec, ROOT_SUFFIX))
    }

    /// Every file of the site, with paths relative to the site root.
    pub fn files(&self) -> Result<Vec<File>> {
        let reference = Path::new(PAGES_DIR).join(REFERENCE_DIR);
        let config = MkDocsConfig::new(self.app)
            .render()
            .wrap_err("failed to render mkdocs configuration")?;

        let mut files = vec![
            File::new(CONFIG_FILE, config),
            File::new(Path::new(PAGES_DIR).join(INDEX_PAGE), index_page(self.app)),
        ];

        for group in &self.app.cli.groups {
            for command in &group.commands {
                let path = reference.join(&group.name).join(format!("{}.md", command.name));
                let page = command_page(&self.app.exec, Some(&group.name), command)?;
                files.push(File::new(path, page));
            }
        }

        for command in &self.app.cli.commands {
            let path = reference.join(format!("{}.md", command.name));
            files.push(File::new(path, command_page(&self.app.exec, None, command)?));
        }

        files.push(File::new(reference.join(ENUMS_PAGE), enums_page(self.app)?));

        Ok(files)
    }

    /// Preview the site without writing it.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .files()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.relative_path().display().to_string(),
                content: file.content().to_string(),
            })
            .collect())
    }

    /// Write the site into `output_dir` and return its root.
    ///
    /// Existing files are overwritten.
    pub fn generate(&self, output_dir: &Path) -> Result<PathBuf> {
        let root = self.root(output_dir);
        let files = self.files()?;
        debug!(root = %root.display(), files = files.len(), "generating documentation");

        for file in &files {
            file.write(&root)?;
        }

        Ok(root)
    }
}

/// Run `mkdocs build` in a generated site.
pub fn build_site(root: &Path) -> Result<()> {
    info!(root = %root.display(), "running mkdocs build");

    let status = Command::new("mkdocs")
        .arg("build")
        .current_dir(root)
        .status()
        .map_err(|e| Error::DocsBuild {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::DocsBuild {
            path: root.to_path_buf(),
            reason: status.to_string(),
        }
        .into());
    }

    Ok(())
}
