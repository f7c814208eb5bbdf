//! Typed object model produced by the parser.
//!
//! Every entity is owned by the [`Application`] root and never mutated
//! after parsing.

mod application;
mod cli;
mod schemas;

pub use application::{Application, Author};
pub use cli::{Argument, Cli, CliOption, Command, Group};
pub use schemas::{EnumObject, Schemas};
