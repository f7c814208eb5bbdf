use std::path::{Path, PathBuf};

use crate::{Application, Result, parse_str};

/// A spec file on disk, with both its raw content and the parsed application.
#[derive(Debug)]
pub struct SpecFile {
    path: PathBuf,
    content: String,
    application: Application,
}

impl SpecFile {
    /// Open and parse a spec file.
    ///
    /// The format is picked from the extension (`.json`, `.yml`/`.yaml`,
    /// `.toml`); anything else is read as JSON, then as YAML.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let application = parse_str(&content, &filename)?;

        Ok(Self {
            path,
            content,
            application,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed application.
    pub fn application(&self) -> &Application {
        &self.application
    }

    pub fn into_application(self) -> Application {
        self.application
    }
}

/// Parse a spec file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Application> {
    SpecFile::open(path).map(SpecFile::into_application)
}
