//! Python type mapper implementation.

use brandon_codegen::language::TypeMapper;
use brandon_core::{ArgType, Scalar};

/// Maps spec types to the click parameter types and spec values to Python
/// literals.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    /// `flag` has no click type of its own; options of that type are
    /// rendered with `is_flag=True` instead.
    fn map_arg_type(&self, arg_type: ArgType) -> &'static str {
        match arg_type {
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::String => "str",
            ArgType::Bool | ArgType::Flag => "bool",
        }
    }

    fn map_literal(&self, value: &Scalar) -> String {
        match value {
            Scalar::String(s) => string_literal(s),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 => format!("{x:.1}"),
            Scalar::Float(x) if x.is_nan() => "float(\"nan\")".to_string(),
            Scalar::Float(x) if x.is_infinite() => {
                let sign = if *x < 0.0 { "-" } else { "" };
                format!("float(\"{sign}inf\")")
            }
            Scalar::Float(x) => x.to_string(),
            Scalar::Bool(true) => "True".to_string(),
            Scalar::Bool(false) => "False".to_string(),
            Scalar::Null => "None".to_string(),
        }
    }
}

/// Double-quoted Python string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Triple-quoted docstring, escaped like [`string_literal`] so quotes and
/// backslashes in user text cannot close it early.
pub(crate) fn docstring(s: &str) -> String {
    format!("\"\"{}\"\"", string_literal(s))
}
