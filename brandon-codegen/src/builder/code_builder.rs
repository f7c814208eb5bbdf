//! Writes code fragments out as indented Python source.

use super::{CodeFragment, Renderable};

/// One indentation level (PEP 8).
const INDENT: &str = "    ";

/// Accumulates rendered fragments, tracking the current block depth.
///
/// # Example
///
/// ```
/// use brandon_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::python();
/// builder.apply_fragment(CodeFragment::block(
///     "def main():",
///     vec![CodeFragment::line("print(\"Hello, world!\")")],
/// ));
///
/// assert_eq!(builder.build(), "def main():\n    print(\"Hello, world!\")\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn python() -> Self {
        Self::default()
    }

    /// Add a line of code at the current depth.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (never indented).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit every fragment of a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block { header, body } => {
                self.push_line(&header);
                self.depth += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.depth -= 1;
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blanks() {
        let mut builder = CodeBuilder::python();
        builder
            .push_line("import click")
            .push_blank()
            .push_line("cli()");
        assert_eq!(builder.build(), "import click\n\ncli()\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct FunctionNode;
        impl Renderable for FunctionNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("@click.command()"),
                    CodeFragment::block(
                        "def hello():",
                        vec![CodeFragment::line("\"\"\"Say hello\"\"\"")],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::python();
        builder.emit(&FunctionNode);
        assert_eq!(
            builder.build(),
            "@click.command()\ndef hello():\n    \"\"\"Say hello\"\"\"\n"
        );
    }

    #[test]
    fn test_nested_blocks_restore_depth() {
        let mut builder = CodeBuilder::python();
        builder.apply_fragment(CodeFragment::block(
            "class Color(Enum):",
            vec![
                CodeFragment::block("def label(self):", vec![CodeFragment::line("pass")]),
                CodeFragment::line("RED = 1"),
            ],
        ));
        builder.push_line("x = Color.RED");
        assert_eq!(
            builder.build(),
            "class Color(Enum):\n    def label(self):\n        pass\n    RED = 1\nx = Color.RED\n"
        );
    }
}
