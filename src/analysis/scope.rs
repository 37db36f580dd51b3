use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::base::Name;

use super::origin::{LocalValueBinding, ObjectOrigin};

/// One lexical frame: the implicit receiver for unqualified lookups plus the
/// names bound locally inside the frame. Pure data; all resolution logic
/// lives in the resolver.
#[derive(Debug, Clone)]
pub struct AnalysisScope {
    receiver: ObjectOrigin,
    /// Insertion-ordered so diagnostics and scope dumps are deterministic.
    locals: IndexMap<Name, Arc<LocalValueBinding>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("local value '{0}' is already declared in this scope")]
    DuplicateLocal(Name),
}

impl AnalysisScope {
    pub fn new(receiver: ObjectOrigin) -> Self {
        Self {
            receiver,
            locals: IndexMap::new(),
        }
    }

    pub fn receiver(&self) -> &ObjectOrigin {
        &self.receiver
    }

    /// Find a local binding by name in this scope only (no chain walking).
    pub fn find_local(&self, name: &str) -> Option<&Arc<LocalValueBinding>> {
        self.locals.get(name)
    }

    /// Bind a name in this scope. Names are unique per scope.
    pub fn declare_local(
        &mut self,
        binding: LocalValueBinding,
    ) -> Result<Arc<LocalValueBinding>, ScopeError> {
        if self.locals.contains_key(&binding.name) {
            return Err(ScopeError::DuplicateLocal(binding.name));
        }
        let binding = Arc::new(binding);
        self.locals
            .insert(binding.name.clone(), Arc::clone(&binding));
        Ok(binding)
    }

    pub fn locals(&self) -> impl Iterator<Item = &Arc<LocalValueBinding>> {
        self.locals.values()
    }
}
