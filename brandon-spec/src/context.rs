//! Parsing context that carries source information through nested entities.

use std::sync::Arc;

use miette::SourceSpan;

use crate::error::{Error, SourceContext};

/// Parsing context that carries source information.
///
/// This struct encapsulates the document text, filename, and current path
/// through the spec hierarchy, making it easier to build diagnostics deep
/// inside recursive parsing.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "cli.yml");
/// let nested = ctx.push("cli").push("db").push("commands");
/// assert_eq!(nested.path_string(), "cli.db.commands");
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments (e.g., ["cli", "db", "commands", "migrate"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self::from_source(SourceContext::new(src, filename))
    }

    pub fn from_source(source: SourceContext) -> Self {
        Self {
            source: Arc::new(source),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe an entity kind at the current path, e.g. "argument in 'cli.db.commands.migrate'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Path of a child key, used when the child itself is malformed.
    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path_string(), key)
        }
    }

    /// Byte offset just past the last of `segments` found in order.
    ///
    /// Each segment is looked up after the previous one, so a nested key is
    /// resolved inside its parent instead of at an earlier textual match.
    fn scope_offset(&self, segments: &[&str]) -> usize {
        let src = self.source.src();
        segments.iter().fold(0, |from, segment| {
            find_key_span(src, segment, from)
                .map(|span| span.offset() + span.len())
                .unwrap_or(from)
        })
    }

    /// Find the span of a child key of the current path.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key, self.scope_offset(&self.path))
    }

    /// Span of the key this context points at.
    fn own_span(&self) -> Option<SourceSpan> {
        let (key, parents) = self.path.split_last()?;
        find_key_span(self.source.src(), key, self.scope_offset(parents))
    }

    /// Span of `value` written under the child entry `key`.
    fn find_entry_value(&self, key: &str, value: &str) -> Option<SourceSpan> {
        let src = self.source.src();
        let from = self.scope_offset(&self.path);
        let from = find_key_span(src, key, from)
            .map(|span| span.offset() + span.len())
            .unwrap_or(from);
        find_value_span(src, value, from)
    }

    pub fn missing_field(&self, entity: &str, field: &str) -> Box<Error> {
        Box::new(Error::MissingField {
            src: self.source.named_source(),
            span: self.own_span(),
            entity: entity.to_string(),
            field: field.to_string(),
        })
    }

    pub fn missing_enum_items(&self, name: &str) -> Box<Error> {
        Box::new(Error::MissingEnumItems {
            src: self.source.named_source(),
            span: self.own_span(),
            name: name.to_string(),
        })
    }

    /// `key` is the entry as written in the document, `name` its normalized form.
    pub fn missing_type(&self, key: &str, name: &str, kind: &str) -> Box<Error> {
        Box::new(Error::MissingType {
            src: self.source.named_source(),
            span: self.find_span(key),
            name: name.to_string(),
            context: self.context_for(kind),
        })
    }

    pub fn invalid_type(&self, key: &str, name: &str, kind: &str, ty: &str) -> Box<Error> {
        Box::new(Error::InvalidType {
            src: self.source.named_source(),
            span: self.find_entry_value(key, ty),
            name: name.to_string(),
            context: self.context_for(kind),
            ty: ty.to_string(),
        })
    }

    pub fn invalid_author(&self, index: usize) -> Box<Error> {
        Box::new(Error::InvalidAuthor {
            src: self.source.named_source(),
            span: self.own_span(),
            index,
        })
    }

    pub fn invalid_structure(&self, key: &str, expected: &'static str) -> Box<Error> {
        Box::new(Error::InvalidStructure {
            src: self.source.named_source(),
            span: self.find_span(key),
            path: self.child_path(key),
            expected,
        })
    }

    pub fn invalid_short(&self, key: &str, name: &str, kind: &str, short: &str) -> Box<Error> {
        Box::new(Error::InvalidShort {
            src: self.source.named_source(),
            span: self.find_entry_value(key, short),
            name: name.to_string(),
            context: self.context_for(kind),
            short: short.to_string(),
        })
    }
}

/// Find the span of a mapping key in a JSON, YAML or TOML document, at or
/// after byte offset `from`.
///
/// Only key positions are matched (`"key":`, `key:`, `key =`, `.key]`), so a
/// word inside a description does not produce a misleading label.
pub(crate) fn find_key_span(src: &str, key: &str, from: usize) -> Option<SourceSpan> {
    if key.is_empty() || from > src.len() {
        return None;
    }

    // JSON and quoted YAML keys
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{key}{quote}");
        for (pos, _) in src.match_indices(&pattern).filter(|(pos, _)| *pos >= from) {
            let rest = src[pos + pattern.len()..].trim_start_matches([' ', '\t']);
            if rest.starts_with(':') || rest.starts_with('=') {
                return Some(SourceSpan::from((pos + 1, key.len())));
            }
        }
    }

    // Bare YAML keys (`key:`) and TOML keys (`key =`) at the start of a line
    for line_start in line_starts(src).filter(|start| *start >= from) {
        let line = &src[line_start..];
        let indent = line.len() - line.trim_start_matches([' ', '\t', '-']).len();
        let Some(rest) = line[indent..].strip_prefix(key) else {
            continue;
        };
        let rest = rest.trim_start_matches([' ', '\t']);
        if rest.starts_with(':') || rest.starts_with('=') {
            return Some(SourceSpan::from((line_start + indent, key.len())));
        }
    }

    // TOML table headers: [cli.key] or [cli.key.arguments]
    for pattern in [format!(".{key}]"), format!(".{key}.")] {
        if let Some(pos) = src[from..].find(&pattern) {
            return Some(SourceSpan::from((from + pos + 1, key.len())));
        }
    }

    None
}

/// Find a quoted or bare scalar value after a `:` or `=`, at or after byte
/// offset `from`.
pub(crate) fn find_value_span(src: &str, value: &str, from: usize) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    for (pos, _) in src.match_indices(value).filter(|(pos, _)| *pos >= from) {
        let before = src[..pos].trim_end_matches(['"', '\'']).trim_end();
        let after = &src[pos + value.len()..];
        let ends_cleanly = after
            .chars()
            .next()
            .is_none_or(|c| matches!(c, '"' | '\'' | ',' | '}' | '\n' | '\r' | ' '));
        if (before.ends_with(':') || before.ends_with('=')) && ends_cleanly {
            return Some(SourceSpan::from((pos, value.len())));
        }
    }

    None
}

fn line_starts(src: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(src.match_indices('\n').map(|(i, _)| i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_path_string() {
        let ctx = ParseContext::new("", "cli.yml");
        let nested = ctx.push("cli").push("db").push("commands");
        assert_eq!(nested.path_string(), "cli.db.commands");
        assert_eq!(ctx.path_string(), "");
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "cli.yml");
        assert_eq!(ctx.context_for("command"), "command");

        let nested = ctx.push("cli").push("db");
        assert_eq!(nested.context_for("argument"), "argument in 'cli.db'");
    }

    #[test]
    fn test_find_key_span_yaml() {
        let src = "name: test\ncli:\n  hello:\n    description: Say hello\n";
        let span = find_key_span(src, "hello", 0).unwrap();
        assert_eq!(span.offset(), 18);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_key_span_json() {
        let src = r#"{"cli": {"hello": {"description": "hello there"}}}"#;
        let span = find_key_span(src, "hello", 0).unwrap();
        assert_eq!(span.offset(), 10);
    }

    #[test]
    fn test_find_key_span_toml_header() {
        let src = "[cli.hello]\ndescription = \"test\"";
        let span = find_key_span(src, "hello", 0).unwrap();
        assert_eq!(span.offset(), 5);
    }

    #[test]
    fn test_find_key_span_ignores_words_in_values() {
        let src = "description: Type your name\n";
        assert!(find_key_span(src, "type", 0).is_none());
    }

    #[test]
    fn test_find_value_span() {
        let src = "arguments:\n  count:\n    type: integer\n";
        let span = find_value_span(src, "integer", 0).unwrap();
        assert_eq!(span.offset(), 30);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_spans_are_scoped_to_the_path() {
        let src = "name: cat\ncli:\n  cat:\n    arguments:\n      a:\n        type: cat\n";
        let ctx = ParseContext::new(src, "cli.yml");
        let arguments = ctx.push("cli").push("cat").push("arguments");

        let key = arguments.find_span("a").unwrap();
        assert_eq!(&src[key.offset()..key.offset() + key.len()], "a");
        assert_eq!(key.offset(), src.find("a:\n").unwrap());

        let value = arguments.find_entry_value("a", "cat").unwrap();
        assert_eq!(value.offset(), src.rfind("cat").unwrap());

        assert_eq!(
            ctx.push("cli").push("cat").own_span().unwrap().offset(),
            src.find("cat:").unwrap()
        );
    }

    #[test]
    fn test_invalid_structure_path() {
        let ctx = ParseContext::new("", "cli.yml");
        let err = ctx.push("cli").invalid_structure("hello", "a mapping");
        assert_eq!(err.to_string(), "`cli.hello` must be a mapping");
    }
}
