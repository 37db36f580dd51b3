//! # Schema
//!
//! The structural model a Strata document is checked against: data-class
//! types with named properties, globally registered external objects, and the
//! per-document import table. Everything here is built before analysis starts
//! and is read-only while resolution runs.

mod registry;
mod types;

pub use registry::{AnalysisSchema, ExternalObject, Imports, SchemaError};
pub use types::{DataClass, DataProperty, DataType, TypeRef};
