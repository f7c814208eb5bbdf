//! Typed Python decorators.
//!
//! Instead of assembling `"@click.option(...)"` strings by hand, decorators
//! are values with a name, positional and keyword arguments, rendered to
//! Python syntax on display.

use std::fmt;

/// A decorator applied to a Python function.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    name: String,
    /// Whether the decorator is a call (`@name()`) rather than a bare name
    call: bool,
    args: Vec<String>,
    kwargs: Vec<(String, String)>,
}

impl Decorator {
    /// A bare decorator, rendered as `@name`.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            call: false,
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    /// A decorator call, rendered as `@name(...)`.
    pub fn call(name: impl Into<String>) -> Self {
        Self {
            call: true,
            ..Self::bare(name)
        }
    }

    /// Add a positional argument, already rendered as a Python expression.
    pub fn arg(mut self, expr: impl Into<String>) -> Self {
        self.call = true;
        self.args.push(expr.into());
        self
    }

    /// Add a keyword argument, already rendered as a Python expression.
    pub fn kwarg(mut self, key: impl Into<String>, expr: impl Into<String>) -> Self {
        self.call = true;
        self.kwargs.push((key.into(), expr.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.call {
            return Ok(());
        }

        let params: Vec<String> = self
            .args
            .iter()
            .cloned()
            .chain(self.kwargs.iter().map(|(k, v)| format!("{k}={v}")))
            .collect();
        write!(f, "({})", params.join(", "))
    }
}
