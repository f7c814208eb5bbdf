use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating artifacts from a parsed application.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported language `{0}`")]
    UnsupportedLanguage(String),

    #[error(
        "Output folder already exists. Either use the flag `--overwrite` to overwrite the contents of this directory or change the app version in your spec file."
    )]
    AlreadyExists { path: PathBuf },

    #[error(
        "no target language: pass `--language` or list at least one entry under `languages` in the spec file"
    )]
    NoLanguage,

    #[error("markdown table row {index} has {found} columns, expected {expected}")]
    TableRow {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("`mkdocs build` failed in '{path}': {reason}")]
    DocsBuild { path: PathBuf, reason: String },
}
