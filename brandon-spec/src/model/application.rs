use super::{Cli, Schemas};

/// Root aggregate of a parsed spec document.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    /// Display name, as written in the spec
    pub name: String,
    /// Identifier derived from `name`, used as package and executable name
    pub exec: String,
    pub version: String,
    pub description: String,
    pub authors: Vec<Author>,
    pub tags: Vec<String>,
    pub license: Option<String>,
    pub url: Option<String>,
    /// Target languages in order of preference
    pub languages: Option<Vec<String>>,
    pub cli: Cli,
    pub schemas: Schemas,
}

impl Application {
    /// The language to generate when none is requested explicitly.
    pub fn default_language(&self) -> Option<&str> {
        self.languages
            .as_ref()
            .and_then(|languages| languages.first())
            .map(String::as_str)
    }
}

/// Author information
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
    pub url: Option<String>,
}
