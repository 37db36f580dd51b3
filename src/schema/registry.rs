use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::base::{FqName, Name};

use super::types::{DataClass, DataType, TypeRef};

/// A globally registered, schema-level named object (a top-level singleton
/// such as a plugin catalog), addressable by fully qualified name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalObject {
    pub fq_name: FqName,
    pub type_ref: TypeRef,
}

impl ExternalObject {
    pub fn new(fq_name: FqName, type_ref: TypeRef) -> Self {
        Self { fq_name, type_ref }
    }
}

/// Error raised while registering schema content. Registration happens before
/// analysis; resolution itself never produces these.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("data type '{0}' is already registered")]
    DuplicateDataType(FqName),
    #[error("external object '{0}' is already registered")]
    DuplicateExternal(FqName),
    #[error("import alias '{alias}' already refers to '{existing}'")]
    AmbiguousImport { alias: Name, existing: FqName },
}

/// The read-only schema a document is analyzed against.
///
/// Built up-front via the `register_*` methods; once analysis begins it is
/// only read, so it can be shared across independently analyzed documents.
#[derive(Debug, Clone)]
pub struct AnalysisSchema {
    top_level_receiver: TypeRef,
    data_types: FxHashMap<FqName, DataType>,
    external_objects: FxHashMap<FqName, Arc<ExternalObject>>,
}

impl AnalysisSchema {
    pub fn new(top_level_receiver: TypeRef) -> Self {
        Self {
            top_level_receiver,
            data_types: FxHashMap::default(),
            external_objects: FxHashMap::default(),
        }
    }

    /// The type of the implicit document-level receiver.
    pub fn top_level_receiver(&self) -> &TypeRef {
        &self.top_level_receiver
    }

    pub fn register_data_class(&mut self, class: DataClass) -> Result<(), SchemaError> {
        let name = class.name.clone();
        if self.data_types.contains_key(&name) {
            return Err(SchemaError::DuplicateDataType(name));
        }
        self.data_types.insert(name, DataType::Class(class));
        Ok(())
    }

    pub fn register_external(&mut self, object: ExternalObject) -> Result<(), SchemaError> {
        let name = object.fq_name.clone();
        if self.external_objects.contains_key(&name) {
            return Err(SchemaError::DuplicateExternal(name));
        }
        self.external_objects.insert(name, Arc::new(object));
        Ok(())
    }

    /// Find a registered type by its exact fully qualified name.
    pub fn data_type(&self, fq_name: &FqName) -> Option<&DataType> {
        self.data_types.get(fq_name)
    }

    /// Find a registered external object by its exact fully qualified name.
    pub fn external_object(&self, fq_name: &FqName) -> Option<&Arc<ExternalObject>> {
        self.external_objects.get(fq_name)
    }

    /// Resolve a type reference to a concrete type descriptor.
    pub fn resolve_type_ref<'s>(&'s self, type_ref: &'s TypeRef) -> Option<&'s DataType> {
        match type_ref {
            TypeRef::Named(fq_name) => self.data_type(fq_name),
            TypeRef::Inline(data_type) => Some(data_type),
        }
    }
}

/// The import table of one analyzed document: alias name → fully qualified
/// name. Populated before analysis, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    aliases: FxHashMap<Name, FqName>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias. Re-registering the same alias for the same target is
    /// a no-op; pointing it somewhere else is ambiguous and rejected.
    pub fn register(&mut self, alias: impl Into<Name>, target: FqName) -> Result<(), SchemaError> {
        let alias = alias.into();
        match self.aliases.get(&alias) {
            Some(existing) if *existing != target => Err(SchemaError::AmbiguousImport {
                alias,
                existing: existing.clone(),
            }),
            _ => {
                self.aliases.insert(alias, target);
                Ok(())
            }
        }
    }

    pub fn fq_name_of(&self, alias: &str) -> Option<&FqName> {
        self.aliases.get(alias)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}
