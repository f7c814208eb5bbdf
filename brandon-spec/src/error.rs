use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for spec parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the document text and filename so that every diagnostic can
/// point back into the spec file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error for an unreadable document.
    pub fn parse_error(&self, message: impl Into<String>, offset: Option<usize>) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: offset.map(|o| SourceSpan::from((o.min(self.src.len()), 0))),
            message: message.into(),
        })
    }

    /// Convert a 1-based line/column pair into a byte offset.
    pub fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        Some(line_start + column.saturating_sub(1))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(brandon::io),
        help("check the path of the spec file passed on the command line")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse spec document: {message}")]
    #[diagnostic(code(brandon::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("field `{field}` is required for `{entity}` object")]
    #[diagnostic(code(brandon::missing_field))]
    MissingField {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        entity: String,
        field: String,
    },

    #[error("enum `{name}` must declare the `items` field, even if it's empty")]
    #[diagnostic(
        code(brandon::missing_items),
        help("add `items: {{}}` to declare an enum without values")
    )]
    MissingEnumItems {
        #[source_code]
        src: NamedSource<String>,
        #[label("enum declared here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("missing type for `{name}` {context}")]
    #[diagnostic(
        code(brandon::missing_type),
        help("valid types are: int, float, string, bool, flag")
    )]
    MissingType {
        #[source_code]
        src: NamedSource<String>,
        #[label("no `type` declared")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid type '{ty}' for `{name}` {context}")]
    #[diagnostic(
        code(brandon::invalid_type),
        help("valid types are: int, float, string, bool, flag")
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        ty: String,
    },

    #[error("author #{index} must be defined using the `Author` object")]
    #[diagnostic(
        code(brandon::invalid_author),
        help("each author is a mapping with a `name` and optional `email` and `url`")
    )]
    InvalidAuthor {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid author")]
        span: Option<SourceSpan>,
        index: usize,
    },

    #[error("`{path}` must be {expected}")]
    #[diagnostic(code(brandon::invalid_structure))]
    InvalidStructure {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected}")]
        span: Option<SourceSpan>,
        path: String,
        expected: &'static str,
    },

    #[error("short flag '{short}' for `{name}` {context} must be a single character")]
    #[diagnostic(code(brandon::invalid_short))]
    InvalidShort {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid short flag")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        short: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let ctx = SourceContext::new("name: a\nversion: 1\n", "cli.yml");
        assert_eq!(ctx.offset_of(1, 1), Some(0));
        assert_eq!(ctx.offset_of(2, 1), Some(8));
        assert_eq!(ctx.offset_of(2, 4), Some(11));
        assert_eq!(ctx.offset_of(0, 1), None);
    }

    #[test]
    fn test_parse_error_message() {
        let ctx = SourceContext::new("{", "cli.json");
        let err = ctx.parse_error("EOF while parsing an object", Some(1));
        assert_eq!(
            err.to_string(),
            "failed to parse spec document: EOF while parsing an object"
        );
    }
}
