use brandon_core::Scalar;
use indexmap::IndexMap;

/// Shared schema definitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schemas {
    pub enums: Vec<EnumObject>,
}

impl Schemas {
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

/// A named enumeration of keys to scalar values
#[derive(Debug, Clone, PartialEq)]
pub struct EnumObject {
    pub name: String,
    pub description: Option<String>,
    /// Items in declaration order
    pub items: IndexMap<String, Scalar>,
}
