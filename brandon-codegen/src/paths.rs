//! Path constants for generated files.

/// Python project layout.
pub mod python {
    /// Package marker file.
    pub const INIT_FILE: &str = "__init__.py";

    /// Subpackage holding one module per command group.
    pub const CLI_DIR: &str = "cli";

    /// Entry point module.
    pub const MAIN_FILE: &str = "main.py";

    /// Module holding the enumerations.
    pub const SCHEMAS_FILE: &str = "schemas.py";

    /// Test package directory relative to project root.
    pub const TESTS_DIR: &str = "tests";

    pub const README_FILE: &str = "README.md";

    pub const PYPROJECT_FILE: &str = "pyproject.toml";

    /// File extension for Python source files.
    pub const FILE_EXTENSION: &str = "py";
}

/// MkDocs site layout.
pub mod docs {
    /// Suffix appended to the exec name for the site directory.
    pub const ROOT_SUFFIX: &str = "-docs";

    /// Site configuration file.
    pub const CONFIG_FILE: &str = "mkdocs.yml";

    /// Pages directory relative to the site root.
    pub const PAGES_DIR: &str = "docs";

    /// Reference pages, relative to the pages directory.
    pub const REFERENCE_DIR: &str = "reference";

    pub const INDEX_PAGE: &str = "index.md";

    pub const ENUMS_PAGE: &str = "enums.md";
}
