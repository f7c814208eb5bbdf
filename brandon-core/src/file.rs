use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::info;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    info!(path = %path.display(), "wrote file");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated, with a path relative to the output root
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given relative path and content (always overwritten)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Only write the file when it is not on disk yet
    pub fn if_missing(mut self) -> Self {
        self.rules = FileRules::if_missing();
        self
    }

    /// Get the relative file path
    pub fn relative_path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for File {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (user-owned files)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test.txt"), "original").unwrap();

        let file = File::new("test.txt", "updated");
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("test.txt")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();

        let file = File::new("new.txt", "new content").if_missing();
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("new.txt")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("existing.txt"), "original").unwrap();

        let file = File::new("existing.txt", "should not write").if_missing();
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("existing.txt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_relative_path_joined_to_base() {
        let file = File::new("pkg/cli/__init__.py", "");
        assert_eq!(
            file.path(Path::new("/out")),
            PathBuf::from("/out/pkg/cli/__init__.py")
        );
        assert_eq!(file.relative_path(), Path::new("pkg/cli/__init__.py"));
    }
}
