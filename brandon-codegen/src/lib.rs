//! Shared code generation for the brandon scaffolding generator.
//!
//! This crate provides the language-agnostic pieces used by the project
//! generators (e.g., `brandon-codegen-python`) and the generators that do not
//! depend on a target language.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (ProjectGenerator, TypeMapper, etc.)
//! - [`project`] - Overwrite-guarded project creation
//! - [`markdown`] - Markdown elements for documentation pages
//! - [`docs`] - MkDocs documentation site
//! - [`summary`] - Plaintext usage summary
//! - [`paths`] - Layout of generated trees

pub mod builder;
pub mod docs;
mod error;
pub mod language;
pub mod markdown;
pub mod paths;
pub mod project;
pub mod summary;

pub use error::Error;
pub use language::{GenerateResult, PreviewFile, ProjectGenerator};
pub use project::Project;
