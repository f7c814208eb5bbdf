use brandon_codegen::builder::{CodeFragment, Renderable};

use super::Decorator;
use crate::type_mapper::docstring;

/// A top-level function definition.
///
/// Renders its decorators, the `def` line and a body made of an optional
/// docstring and statements. An empty body becomes `pass`.
#[derive(Debug, Clone, Default)]
pub struct Function {
    name: String,
    params: Vec<String>,
    decorators: Vec<Decorator>,
    docstring: Option<String>,
    body: Vec<String>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    pub fn params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a decorator; decorators render in insertion order.
    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn decorators(mut self, decorators: impl IntoIterator<Item = Decorator>) -> Self {
        self.decorators.extend(decorators);
        self
    }

    pub fn docstring(mut self, doc: impl Into<String>) -> Self {
        self.docstring = Some(doc.into());
        self
    }

    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .decorators
            .iter()
            .map(|d| CodeFragment::line(d.to_string()))
            .collect();

        let mut body: Vec<CodeFragment> = Vec::new();
        if let Some(doc) = &self.docstring {
            body.push(CodeFragment::line(docstring(doc)));
        }
        body.extend(self.body.iter().map(CodeFragment::line));
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }

        let header = format!("def {}({}):", self.name, self.params.join(", "));
        fragments.push(CodeFragment::block(header, body));
        fragments
    }
}

/// Plain top-level statements, kept together as one item.
#[derive(Debug, Clone, Default)]
pub struct Statements(Vec<String>);

impl Statements {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(lines.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Renderable for Statements {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.iter().map(CodeFragment::line).collect()
    }
}

/// `if __name__ == "__main__":` calling the entry point.
#[derive(Debug, Clone)]
pub struct MainGuard {
    entry_point: String,
}

impl MainGuard {
    pub fn new(entry_point: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
        }
    }
}

impl Renderable for MainGuard {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            "if __name__ == \"__main__\":",
            vec![CodeFragment::line(format!("{}()", self.entry_point))],
        )]
    }
}

#[cfg(test)]
mod tests {
    use brandon_codegen::builder::CodeBuilder;

    use super::*;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::python();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_decorated_function() {
        let function = Function::new("my_function")
            .decorator(Decorator::bare("my_dec"))
            .decorator(Decorator::call("click.command"))
            .decorator(
                Decorator::call("click.option")
                    .arg("\"-o\"")
                    .arg("\"--opt\"")
                    .kwarg("type", "str")
                    .kwarg("default", "os.getcwd()"),
            )
            .param("opt")
            .docstring("My test function");

        assert_eq!(
            render(&function),
            "@my_dec\n\
             @click.command()\n\
             @click.option(\"-o\", \"--opt\", type=str, default=os.getcwd())\n\
             def my_function(opt):\n    \"\"\"My test function\"\"\"\n"
        );
    }

    #[test]
    fn test_empty_body_is_pass() {
        assert_eq!(render(&Function::new("noop")), "def noop():\n    pass\n");
    }

    #[test]
    fn test_statements_after_docstring() {
        let function = Function::new("main")
            .params(["a", "b"])
            .docstring("Entry")
            .statement("print(a, b)");

        assert_eq!(
            render(&function),
            "def main(a, b):\n    \"\"\"Entry\"\"\"\n    print(a, b)\n"
        );
    }

    #[test]
    fn test_main_guard() {
        assert_eq!(
            render(&MainGuard::new("cli")),
            "if __name__ == \"__main__\":\n    cli()\n"
        );
    }
}
