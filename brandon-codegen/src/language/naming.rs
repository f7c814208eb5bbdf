//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how to transform spec names into identifiers and how to handle
/// reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an enum name to a type name (e.g., "log_level" -> "LogLevel")
    pub enum_to_type: fn(&str) -> String,
    /// Transform an enum key to a member name (e.g., "debug" -> "DEBUG")
    pub key_to_member: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "import" -> "_import" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe identifier, escaping reserved words and names that cannot
    /// start an identifier.
    pub fn safe_name(&self, name: &str) -> String {
        let invalid_start = name
            .chars()
            .next()
            .is_none_or(|c| c.is_ascii_digit());

        if self.is_reserved(name) || invalid_start {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.enum_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as an enum member.
    pub fn member_name(&self, key: &str) -> String {
        let transformed = (self.key_to_member)(key);
        self.safe_name(&transformed)
    }
}
