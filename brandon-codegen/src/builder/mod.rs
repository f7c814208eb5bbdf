//! Code generation building blocks.
//!
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for nodes that lower to code fragments
//! - [`CodeBuilder`] - Writes fragments out as indented text

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
