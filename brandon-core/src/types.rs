//! Value types shared by the spec model and the generators.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported argument and option types in a spec document.
///
/// This is a language-agnostic representation; generators map it to
/// their own type syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    Int,
    Float,
    String,
    Bool,
    Flag,
}

impl ArgType {
    /// All types, in the order they are documented.
    pub const ALL: [ArgType; 5] = [
        ArgType::Int,
        ArgType::Float,
        ArgType::String,
        ArgType::Bool,
        ArgType::Flag,
    ];

    /// Get the type name as written in spec documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::String => "string",
            ArgType::Bool => "bool",
            ArgType::Flag => "flag",
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgType {
    type Err = String;

    /// Type names are matched exactly; `"Int"` is not a valid type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArgType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid type", s))
    }
}

/// A scalar value from a spec document (enum items, defaults, examples).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Convert a JSON value, returning `None` for arrays and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::String(s) => Some(Scalar::String(s.clone())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Null => Some(Scalar::Null),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Scalar::Int(i)),
                None => n.as_f64().map(Scalar::Float),
            },
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    /// Plain rendering used in documentation tables; null renders empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => Ok(()),
        }
    }
}
