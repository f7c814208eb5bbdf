//! Spec document parsing and the application object model.
//!
//! A spec document describes an application (metadata, authors, commands
//! grouped or not, shared enums) in JSON, YAML or TOML. Parsing validates the
//! document and returns an [`Application`]; failures are [`Error`] values that
//! render as `miette` diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod document;
mod error;
mod file;
mod language;
mod model;
mod parse;

pub use context::ParseContext;
pub use document::Format;
pub use error::{Error, Result, SourceContext};
pub use file::{SpecFile, parse_file};
pub use language::Language;
pub use model::*;
pub use parse::{parse_str, parse_str_with_format};
