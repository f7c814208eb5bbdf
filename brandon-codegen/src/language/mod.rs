//! Language-specific abstractions.
//!
//! - [`ProjectGenerator`] - Main trait for project generators
//! - [`TypeMapper`] - Trait for mapping spec types to language types
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`GenerateResult`] - Result of project generation
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, PreviewFile, ProjectGenerator, TypeMapper};
