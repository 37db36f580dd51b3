//! # Semantic Analysis
//!
//! Name resolution for Strata documents: given a property-access expression,
//! decide what it refers to (a scope-local value, a property of some receiver,
//! or a registered external object) and, separately, whether it is a legal
//! assignment target.
//!
//! Resolution is a pure read-only traversal over a fixed context; the error
//! collector is the only write target, and diagnostics are data, never
//! control flow.

mod context;
mod errors;
mod origin;
mod resolver;
mod scope;

pub use context::AnalysisContext;
pub use errors::{ErrorCollector, ErrorReason, ResolutionError};
pub use origin::{LocalValueBinding, ObjectOrigin};
pub use resolver::{ExpressionResolver, PropertyAccessResolver, PropertyTarget};
pub use scope::{AnalysisScope, ScopeError};
