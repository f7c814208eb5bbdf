//! PythonModule abstraction for structured Python file generation.
//!
//! Imports come first, then top-level items; PEP 8 puts two blank lines
//! between them.

use brandon_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A Python import statement.
///
/// A dotted path imports its last segment from the parent module
/// (`"a.b.c"` renders as `from a.b import c`); a plain name renders as
/// `import name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Import(String);

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    fn format(&self) -> String {
        match self.0.rsplit_once('.') {
            Some((module, symbol)) => format!("from {module} import {symbol}"),
            None => format!("import {}", self.0),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}

/// A structured representation of a Python module.
///
/// # Example
///
/// ```
/// use brandon_codegen_python::{Import, PythonModule, ast::MainGuard};
///
/// let code = PythonModule::new()
///     .import(Import::new("click"))
///     .add(MainGuard::new("cli"))
///     .render();
///
/// assert_eq!(code, "import click\n\n\nif __name__ == \"__main__\":\n    cli()\n");
/// ```
#[derive(Default)]
pub struct PythonModule {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl PythonModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a top-level item (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::python();

        for import in &self.imports {
            builder.emit(import);
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || !self.imports.is_empty() {
                builder.push_blank().push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
