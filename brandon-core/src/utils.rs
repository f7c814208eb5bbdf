//! Shared string utilities for parsing and code generation.

/// Normalize a display name into an identifier usable as a symbol name.
///
/// Characters outside `[A-Za-z0-9_-]` are dropped, the result is lower-cased
/// and dashes become underscores (e.g. `"Get-cOmm!"` -> `"get_comm"`).
pub fn normalize_identifier(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| match c {
            '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Title-case every word, then keep ASCII letters only (e.g. "log_level2" -> "LogLevel").
///
/// Used for generated class names and enum headings.
pub fn to_class_name(s: &str) -> String {
    let mut titled = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_cased {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            titled.push(c);
            prev_cased = false;
        }
    }
    titled.retain(|c| c.is_ascii_alphabetic());
    titled
}

/// Keep letters and underscores, upper-cased (e.g. "key-1" -> "KEY").
pub fn to_constant_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
