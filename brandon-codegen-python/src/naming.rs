//! Python-specific naming conventions.

use brandon_codegen::language::NamingConvention;
use brandon_core::{to_class_name, to_constant_name};

fn escape_python_reserved(name: &str) -> String {
    format!("_{name}")
}

/// Python naming conventions.
///
/// Besides the language keywords, `cli`, `click` and `Enum` are reserved:
/// generated modules bind them at top level.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    enum_to_type: to_class_name,
    key_to_member: to_constant_name,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield", "Enum", "cli", "click",
    ],
    escape_reserved: escape_python_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_naming_type() {
        assert_eq!(PYTHON_NAMING.type_name("log_level"), "LogLevel");
        assert_eq!(PYTHON_NAMING.type_name("http_method"), "HttpMethod");
        assert_eq!(PYTHON_NAMING.type_name("enum1"), "_Enum");
    }

    #[test]
    fn test_python_naming_member() {
        assert_eq!(PYTHON_NAMING.member_name("debug"), "DEBUG");
        assert_eq!(PYTHON_NAMING.member_name("42"), "_");
    }

    #[test]
    fn test_python_reserved_words() {
        assert!(PYTHON_NAMING.is_reserved("import"));
        assert!(PYTHON_NAMING.is_reserved("None"));
        assert!(PYTHON_NAMING.is_reserved("cli"));
        assert!(!PYTHON_NAMING.is_reserved("build"));
    }

    #[test]
    fn test_python_escape_reserved() {
        assert_eq!(PYTHON_NAMING.safe_name("import"), "_import");
        assert_eq!(PYTHON_NAMING.safe_name("3d"), "_3d");
        assert_eq!(PYTHON_NAMING.safe_name("deploy"), "deploy");
    }
}
