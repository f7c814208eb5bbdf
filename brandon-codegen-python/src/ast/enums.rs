use brandon_codegen::builder::{CodeFragment, Renderable};

use crate::type_mapper::docstring;

/// A `class Name(Enum):` definition with `MEMBER = literal` lines.
#[derive(Debug, Clone)]
pub struct EnumClass {
    name: String,
    docstring: Option<String>,
    members: Vec<(String, String)>,
}

impl EnumClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: None,
            members: Vec::new(),
        }
    }

    pub fn docstring(mut self, doc: impl Into<String>) -> Self {
        self.docstring = Some(doc.into());
        self
    }

    /// Add a member; `value` is already a Python literal.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }
}

impl Renderable for EnumClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::with_capacity(self.members.len() + 1);
        if let Some(doc) = &self.docstring {
            body.push(CodeFragment::line(docstring(doc)));
        }
        for (name, value) in &self.members {
            body.push(CodeFragment::line(format!("{name} = {value}")));
        }
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }

        vec![CodeFragment::block(
            format!("class {}(Enum):", self.name),
            body,
        )]
    }
}

#[cfg(test)]
mod tests {
    use brandon_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_enum_class() {
        let class = EnumClass::new("LogLevel")
            .docstring("Verbosity")
            .member("DEBUG", "10")
            .member("NAME", "\"info\"");

        let mut builder = CodeBuilder::python();
        builder.emit(&class);

        assert_eq!(
            builder.build(),
            "class LogLevel(Enum):\n    \"\"\"Verbosity\"\"\"\n    DEBUG = 10\n    NAME = \"info\"\n"
        );
    }

    #[test]
    fn test_docstring_with_quotes_stays_closed() {
        let mut builder = CodeBuilder::python();
        builder.emit(&EnumClass::new("Mode").docstring(r#"Pick "fast" or """safe""""#));

        assert_eq!(
            builder.build(),
            "class Mode(Enum):\n    \"\"\"Pick \\\"fast\\\" or \\\"\\\"\\\"safe\\\"\\\"\\\"\"\"\"\n"
        );
    }

    #[test]
    fn test_empty_enum_class() {
        let mut builder = CodeBuilder::python();
        builder.emit(&EnumClass::new("Empty"));

        assert_eq!(builder.build(), "class Empty(Enum):\n    pass\n");
    }
}
