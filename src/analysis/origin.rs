use std::sync::Arc;

use crate::base::{Name, Span};
use crate::schema::{AnalysisSchema, DataProperty, DataType, ExternalObject, TypeRef};
use crate::syntax::{Literal, LiteralValue, PropertyAccess};

/// Where a resolved value came from.
///
/// Name resolution constructs [`FromLocalValue`](ObjectOrigin::FromLocalValue),
/// [`PropertyReference`](ObjectOrigin::PropertyReference) and
/// [`External`](ObjectOrigin::External); the remaining variants are produced
/// by the expression evaluator but flow back through this crate as resolved
/// receivers.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectOrigin {
    /// The implicit document-level receiver.
    TopLevelReceiver { type_ref: TypeRef, span: Span },
    /// A scope-local binding.
    FromLocalValue(Arc<LocalValueBinding>),
    /// A property read off an already-resolved receiver.
    PropertyReference {
        receiver: Box<ObjectOrigin>,
        property: DataProperty,
        access: PropertyAccess,
    },
    /// A globally registered external object.
    External {
        object: Arc<ExternalObject>,
        access: PropertyAccess,
    },
    /// A literal constant.
    Constant { literal: Literal },
    /// An object produced by a factory/constructor invocation.
    NewObject { type_ref: TypeRef, span: Span },
}

static BOOLEAN: DataType = DataType::Boolean;
static INT: DataType = DataType::Int;
static LONG: DataType = DataType::Long;
static STRING: DataType = DataType::String;

impl ObjectOrigin {
    /// The source location this origin points back to.
    pub fn span(&self) -> Span {
        match self {
            ObjectOrigin::TopLevelReceiver { span, .. } => *span,
            ObjectOrigin::FromLocalValue(binding) => binding.assignment_span,
            ObjectOrigin::PropertyReference { access, .. } => access.span,
            ObjectOrigin::External { access, .. } => access.span,
            ObjectOrigin::Constant { literal } => literal.span,
            ObjectOrigin::NewObject { span, .. } => *span,
        }
    }

    /// Resolve the structural type of this origin against the schema.
    ///
    /// Local values take the type of whatever they were bound to, so this
    /// follows binding chains.
    pub fn data_type<'s>(&'s self, schema: &'s AnalysisSchema) -> Option<&'s DataType> {
        match self {
            ObjectOrigin::TopLevelReceiver { type_ref, .. } => schema.resolve_type_ref(type_ref),
            ObjectOrigin::FromLocalValue(binding) => binding.origin.data_type(schema),
            ObjectOrigin::PropertyReference { property, .. } => {
                schema.resolve_type_ref(&property.type_ref)
            }
            ObjectOrigin::External { object, .. } => schema.resolve_type_ref(&object.type_ref),
            ObjectOrigin::Constant { literal } => Some(match literal.value {
                LiteralValue::Boolean(_) => &BOOLEAN,
                LiteralValue::Int(_) => &INT,
                LiteralValue::Long(_) => &LONG,
                LiteralValue::String(_) => &STRING,
            }),
            ObjectOrigin::NewObject { type_ref, .. } => schema.resolve_type_ref(type_ref),
        }
    }
}

/// A name bound within a lexical scope: the value-origin it was bound to and
/// the assignment that introduced it (kept for diagnostics).
#[derive(Debug, Clone, PartialEq)]
pub struct LocalValueBinding {
    pub name: Name,
    pub origin: ObjectOrigin,
    pub assignment_span: Span,
}

impl LocalValueBinding {
    pub fn new(name: impl Into<Name>, origin: ObjectOrigin, assignment_span: Span) -> Self {
        Self {
            name: name.into(),
            origin,
            assignment_span,
        }
    }
}
