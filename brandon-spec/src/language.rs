//! Target languages for project generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for project stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// Python package using click
    Python,
    /// Single-file Python script using click
    PythonSingle,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Python, Language::PythonSingle];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::PythonSingle => "python-single",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "python-single" | "python_single" => Ok(Language::PythonSingle),
            _ => Err(format!(
                "unknown language '{}', expected 'python' or 'python-single'",
                s
            )),
        }
    }
}
