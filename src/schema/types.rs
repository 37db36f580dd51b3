use crate::base::{FqName, Name};

/// A structural type declared by the schema.
///
/// Only the [`DataType::Class`] shape carries properties; the primitive shapes
/// exist so that property values and constants have types too.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Boolean,
    Int,
    Long,
    String,
    Unit,
    Class(DataClass),
}

impl DataType {
    /// Look up a named property on this type.
    ///
    /// Returns `None` for every non-class shape; callers treat "not a
    /// property" as "try the next candidate source", not as an error.
    pub fn property(&self, name: &str) -> Option<&DataProperty> {
        match self {
            DataType::Class(class) => class.property(name),
            _ => None,
        }
    }
}

/// A schema-defined "data class": a fixed, ordered set of named properties.
#[derive(Debug, Clone, PartialEq)]
pub struct DataClass {
    pub name: FqName,
    pub properties: Vec<DataProperty>,
}

impl DataClass {
    pub fn new(name: FqName, properties: Vec<DataProperty>) -> Self {
        Self { name, properties }
    }

    /// Exact-name lookup. Property names are unique within a class, so the
    /// first match is the only one.
    pub fn property(&self, name: &str) -> Option<&DataProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A property descriptor on a data class.
#[derive(Debug, Clone, PartialEq)]
pub struct DataProperty {
    pub name: Name,
    pub type_ref: TypeRef,
    /// Read-only properties are legal resolution results; rejecting writes to
    /// them is owned by the assignment type checker, not by name resolution.
    pub read_only: bool,
}

impl DataProperty {
    pub fn new(name: impl Into<Name>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            read_only: false,
        }
    }

    pub fn read_only(name: impl Into<Name>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            read_only: true,
        }
    }
}

/// Reference to a type: either a registered schema type by fully qualified
/// name, or an inline type (primitives need no registration).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Named(FqName),
    Inline(Box<DataType>),
}

impl From<DataType> for TypeRef {
    fn from(data_type: DataType) -> Self {
        TypeRef::Inline(Box::new(data_type))
    }
}
