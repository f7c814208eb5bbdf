//! Markdown elements used to compose documentation pages.
//!
//! A [`Document`] starts with its title as a level-one heading; every other
//! [`Heading`] is rendered one level deeper than its `level`, so level 1 is
//! `##`.

use std::fmt;

use crate::Error;

/// A block of Markdown that renders to text.
pub trait Element {
    fn render(&self) -> String;
}

/// A page made of elements, rendered in insertion order.
pub struct Document {
    elements: Vec<Box<dyn Element>>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            elements: vec![Box::new(Heading::new(title, 0))],
        }
    }

    pub fn add(&mut self, element: impl Element + 'static) -> &mut Self {
        self.elements.push(Box::new(element));
        self
    }

    pub fn render(&self) -> String {
        self.elements.iter().map(|e| e.render()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    name: String,
    level: usize,
}

impl Heading {
    pub fn new(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

impl Element for Heading {
    fn render(&self) -> String {
        format!("{} {}\n\n", "#".repeat(self.level + 1), self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph(pub String);

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Element for Paragraph {
    fn render(&self) -> String {
        format!("{}\n\n", self.0)
    }
}

/// A table whose rows all have the same number of cells as the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with a bold header.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, failing if its width differs from the header's.
    pub fn push_row<I, S>(&mut self, row: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.header.len() {
            return Err(Error::TableRow {
                index: self.rows.len(),
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append every row of `rows`, stopping at the first malformed one.
    pub fn with_rows<R, I, S>(mut self, rows: R) -> Result<Self, Error>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.push_row(row)?;
        }
        Ok(self)
    }
}

impl Element for Table {
    fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header: Vec<String> = self
            .header
            .iter()
            .map(|h| format!(" *{h}* "))
            .collect();
        lines.push(table_line(&header));
        lines.push(table_line(&vec!["---".to_string(); self.header.len()]));

        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|cell| format!(" {cell} ")).collect();
            lines.push(table_line(&cells));
        }

        lines.join("\n") + "\n\n"
    }
}

fn table_line(cells: &[String]) -> String {
    format!("|{}|", cells.join("|"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnorderedList(Vec<String>);

impl UnorderedList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl Element for UnorderedList {
    fn render(&self) -> String {
        let lines: Vec<String> = self.0.iter().map(|item| format!("- {item}")).collect();
        lines.join("\n") + "\n\n"
    }
}

/// An inline link, usually embedded in another element's text.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    text: String,
    url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.text, self.url)
    }
}

impl Element for Link {
    fn render(&self) -> String {
        self.to_string()
    }
}

/// A shell invocation shown as inline code, prefixed by the prompt marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellCommand {
    args: Vec<String>,
}

impl ShellCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Element for ShellCommand {
    fn render(&self) -> String {
        format!("`$ {}`\n\n", self.args.join(" "))
    }
}
