//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) turns
//! them into text with the right indentation.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A header line followed by an indented body.
    ///
    /// Python blocks have no closing line; the body is simply indented.
    Block {
        header: String,
        body: Vec<CodeFragment>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
