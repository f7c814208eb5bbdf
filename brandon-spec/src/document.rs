//! Loading spec documents from JSON, YAML or TOML text.

use std::{fmt, path::Path, str::FromStr};

use serde_json::{Map, Value};
use tracing::debug;

use crate::{Result, error::SourceContext};

/// Supported spec document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yml" | "yaml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            _ => Err(format!(
                "unknown format '{}', expected 'json', 'yaml' or 'toml'",
                s
            )),
        }
    }
}

/// Read a document into a mapping, keeping the key order of the source.
///
/// Without an explicit format the text is tried as JSON first and then as
/// YAML, which covers both since the former is mostly a subset of the latter.
pub(crate) fn load(source: &SourceContext, format: Option<Format>) -> Result<Map<String, Value>> {
    let value = match format {
        Some(Format::Json) => load_json(source)?,
        Some(Format::Yaml) => load_yaml(source)?,
        Some(Format::Toml) => load_toml(source)?,
        None => match serde_json::from_str(source.src()) {
            Ok(value) => value,
            Err(_) => load_yaml(source)?,
        },
    };

    debug!(filename = source.filename(), ?format, "loaded spec document");

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(source.parse_error("the document root must be a mapping", Some(0))),
    }
}

fn load_json(source: &SourceContext) -> Result<Value> {
    serde_json::from_str(source.src()).map_err(|e| {
        let offset = source.offset_of(e.line(), e.column());
        source.parse_error(e.to_string(), offset)
    })
}

fn load_yaml(source: &SourceContext) -> Result<Value> {
    serde_yaml::from_str(source.src()).map_err(|e| {
        let offset = e.location().map(|loc| loc.index());
        source.parse_error(e.to_string(), offset)
    })
}

fn load_toml(source: &SourceContext) -> Result<Value> {
    toml::from_str(source.src()).map_err(|e| {
        let offset = e.span().map(|span| span.start);
        source.parse_error(e.message().to_string(), offset)
    })
}
