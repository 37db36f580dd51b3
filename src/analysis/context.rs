use std::sync::Arc;

use tracing::trace;

use crate::schema::{AnalysisSchema, Imports};

use super::errors::{ErrorCollector, ResolutionError};
use super::origin::{LocalValueBinding, ObjectOrigin};
use super::scope::{AnalysisScope, ScopeError};

/// Everything resolution reads while analyzing one document.
///
/// Schema and imports are shared, read-only inputs; the scope stack and the
/// error collector are owned exclusively by this context. Resolution takes
/// `&mut` only to append diagnostics — it never mutates scopes, schema, or
/// imports.
pub struct AnalysisContext<'a> {
    schema: &'a AnalysisSchema,
    imports: &'a Imports,
    scopes: Vec<AnalysisScope>,
    errors: ErrorCollector,
}

impl<'a> AnalysisContext<'a> {
    /// Create a context with the document-level scope already entered.
    pub fn new(
        schema: &'a AnalysisSchema,
        imports: &'a Imports,
        top_level_receiver: ObjectOrigin,
    ) -> Self {
        Self {
            schema,
            imports,
            scopes: vec![AnalysisScope::new(top_level_receiver)],
            errors: ErrorCollector::new(),
        }
    }

    pub fn schema(&self) -> &'a AnalysisSchema {
        self.schema
    }

    pub fn imports(&self) -> &'a Imports {
        self.imports
    }

    // ============================================================
    // Scope stack
    // ============================================================

    /// Enter a nested scope with the given receiver (a block or lambda body).
    pub fn enter_scope(&mut self, receiver: ObjectOrigin) {
        trace!("[SCOPE] enter, depth={}", self.scopes.len() + 1);
        self.scopes.push(AnalysisScope::new(receiver));
    }

    /// Leave the current scope. The document-level scope is never popped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
            trace!("[SCOPE] exit, depth={}", self.scopes.len());
        }
    }

    pub fn current_scope(&self) -> &AnalysisScope {
        self.scopes.last().expect("scope stack is never empty")
    }

    /// Bind a name in the current scope.
    pub fn declare_local(
        &mut self,
        binding: LocalValueBinding,
    ) -> Result<Arc<LocalValueBinding>, ScopeError> {
        trace!("[SCOPE] declare local '{}'", binding.name);
        self.scopes
            .last_mut()
            .expect("scope stack is never empty")
            .declare_local(binding)
    }

    /// Scopes in lookup order, innermost first.
    pub fn scopes_innermost_first(&self) -> impl Iterator<Item = &AnalysisScope> {
        self.scopes.iter().rev()
    }

    // ============================================================
    // Diagnostics
    // ============================================================

    pub fn collect_error(&mut self, error: ResolutionError) {
        trace!("[DIAGNOSTIC] {}", error);
        self.errors.collect(error);
    }

    pub fn errors(&self) -> &ErrorCollector {
        &self.errors
    }

    /// Take the collected diagnostics, e.g. when the document is done.
    pub fn take_errors(&mut self) -> Vec<ResolutionError> {
        self.errors.take()
    }
}
