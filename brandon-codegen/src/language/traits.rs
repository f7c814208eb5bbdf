//! Language-agnostic project generation traits.

use std::path::{Path, PathBuf};

use brandon_core::{ArgType, Scalar};
use brandon_spec::Language;
use eyre::Result;

/// Trait for language-specific project generators.
///
/// Implement this trait to add support for generating a project skeleton in
/// a new language.
pub trait ProjectGenerator {
    /// The language this generator targets
    fn language(&self) -> Language;

    /// Path created by [`generate`](Self::generate) inside `output_dir`.
    ///
    /// Generation refuses to run when it already exists, unless overwriting
    /// is allowed.
    fn project_root(&self, output_dir: &Path) -> PathBuf;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of project generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed
    pub skipped: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping spec types to language-specific types and literals.
pub trait TypeMapper {
    /// Map an argument type to a language-specific type string
    fn map_arg_type(&self, arg_type: ArgType) -> &'static str;

    /// Render a scalar as a literal of the target language
    fn map_literal(&self, value: &Scalar) -> String;
}
