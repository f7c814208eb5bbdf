//! Python project generation for the brandon scaffolding generator.
//!
//! Two layouts are supported, both built on [click](https://click.palletsprojects.com):
//!
//! - [`Generator`] - a poetry package with one module per command group
//! - [`ScriptGenerator`] - the whole CLI in a single script

mod click;
mod generator;
mod module;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use brandon_codegen::{GenerateResult, PreviewFile, ProjectGenerator};
pub use generator::{Generator, ScriptGenerator};
pub use module::{Import, PythonModule};
pub use naming::PYTHON_NAMING;
pub use type_mapper::{PythonTypeMapper, string_literal};
