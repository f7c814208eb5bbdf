//! Files of a generated Python project.
//!
//! Paths are relative to the `base` passed to
//! [`GeneratedFile::path`](brandon_core::GeneratedFile::path): the project
//! root for the package layout, the output directory for the single script.

mod group_py;
mod init_py;
mod main_py;
mod pyproject_toml;
mod readme;
mod schemas_py;
mod script_py;

pub use group_py::GroupPy;
pub use init_py::InitPy;
pub use main_py::MainPy;
pub use pyproject_toml::PyprojectToml;
pub use readme::Readme;
pub use schemas_py::SchemasPy;
pub use script_py::ScriptPy;

use crate::Import;

/// Common import helpers for generated modules.
pub mod imports {
    use super::Import;

    /// `import click`
    pub fn click() -> Import {
        Import::new("click")
    }

    /// `from enum import Enum`
    pub fn enum_base() -> Import {
        Import::new("enum.Enum")
    }
}
