//! Unified language dispatch.
//!
//! Maps a target-language identifier to its project generator.

use brandon_codegen::{Error, ProjectGenerator};
use brandon_codegen_python::{Generator as PythonGenerator, ScriptGenerator as PythonScriptGenerator};
use brandon_spec::{Application, Language};

/// Language-specific support for project generation.
pub struct LanguageSupport {
    language: Language,
    /// What the generated project looks like, for messages.
    pub layout: &'static str,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        match language {
            Language::Python => Self {
                language,
                layout: "python package",
            },
            Language::PythonSingle => Self {
                language,
                layout: "python script",
            },
        }
    }

    /// Look a language up by identifier.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse::<Language>()
            .map(Self::get)
            .map_err(|_| Error::UnsupportedLanguage(name.to_string()))
    }

    /// Create a generator for this language.
    pub fn generator<'a>(&self, app: &'a Application) -> Box<dyn ProjectGenerator + 'a> {
        match self.language {
            Language::Python => Box::new(PythonGenerator::new(app)),
            Language::PythonSingle => Box::new(PythonScriptGenerator::new(app)),
        }
    }
}
