use std::fmt;
use std::sync::Arc;

use crate::schema::ExternalObject;
use crate::syntax::PropertyAccess;

use super::origin::LocalValueBinding;

/// Why a resolution attempt produced a diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorReason {
    /// No candidate exists for a read access.
    UnresolvedReference,
    /// The assignment target resolved to an immutable local binding.
    ValReassignment(Arc<LocalValueBinding>),
    /// The assignment target resolved to an external object.
    ExternalReassignment(Arc<ExternalObject>),
}

/// A soft diagnostic: the offending access plus the reason. Never raised as a
/// control-flow fault; appended to the collector while analysis continues.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionError {
    pub access: PropertyAccess,
    pub reason: ErrorReason,
}

impl ResolutionError {
    pub fn new(access: PropertyAccess, reason: ErrorReason) -> Self {
        Self { access, reason }
    }

    pub fn span(&self) -> crate::base::Span {
        self.access.span
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ErrorReason::UnresolvedReference => {
                write!(f, "unresolved reference: '{}'", self.access.name)
            }
            ErrorReason::ValReassignment(binding) => {
                write!(f, "cannot reassign immutable value '{}'", binding.name)
            }
            ErrorReason::ExternalReassignment(object) => {
                write!(f, "cannot reassign external object '{}'", object.fq_name)
            }
        }
    }
}

/// Collects diagnostics for one analyzed document, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    errors: Vec<ResolutionError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn collect(&mut self, error: ResolutionError) {
        self.errors.push(error);
    }

    /// All diagnostics collected so far.
    pub fn errors(&self) -> &[ResolutionError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<ResolutionError> {
        std::mem::take(&mut self.errors)
    }
}
