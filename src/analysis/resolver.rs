use std::sync::Arc;

use tracing::trace;

use crate::schema::{DataProperty, ExternalObject};
use crate::syntax::{Expr, PropertyAccess};

use super::context::AnalysisContext;
use super::errors::{ErrorReason, ResolutionError};
use super::origin::{LocalValueBinding, ObjectOrigin};

/// The external expression evaluator, used to resolve the receiver of a
/// qualified access. It may recurse back into [`PropertyAccessResolver`] for
/// nested property accesses.
pub trait ExpressionResolver {
    fn resolve_expression(
        &self,
        ctx: &mut AnalysisContext<'_>,
        expr: &Expr,
    ) -> Option<ObjectOrigin>;
}

/// A resolved assignment target: the receiver to mutate and the property on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTarget {
    pub receiver: ObjectOrigin,
    pub property: DataProperty,
}

/// One entry of the ordered candidate sequence for a property access.
///
/// Both resolution paths draw from the same sequence and inspect only its
/// first element, so candidate generation is a short-circuiting ordered
/// search: each source is consulted only if every higher-priority source came
/// up empty. In particular the receiver expression of a qualified access is
/// evaluated exactly once, and the external-object table is only consulted
/// for pure access chains.
#[derive(Debug, Clone)]
enum ResolutionCandidate {
    LocalValue(Arc<LocalValueBinding>),
    Property {
        receiver: ObjectOrigin,
        property: DataProperty,
    },
    External(Arc<ExternalObject>),
}

/// Resolves property-access expressions against the active context.
///
/// Ordering: lexical locals shadow structural properties of scope receivers,
/// which shadow imported external objects; for qualified accesses, a property
/// of the resolved receiver wins over reading the whole chain as a fully
/// qualified external name.
pub struct PropertyAccessResolver<'r> {
    expression_resolver: &'r dyn ExpressionResolver,
}

impl<'r> PropertyAccessResolver<'r> {
    pub fn new(expression_resolver: &'r dyn ExpressionResolver) -> Self {
        Self {
            expression_resolver,
        }
    }

    // ============================================================
    // Public operations
    // ============================================================

    /// Resolve a reference expression to the origin it denotes.
    ///
    /// Appends an unresolved-reference diagnostic and returns `None` when no
    /// candidate exists; silent on success. This is the only place that
    /// reports "unresolved".
    pub fn resolve_to_origin(
        &self,
        ctx: &mut AnalysisContext<'_>,
        access: &PropertyAccess,
    ) -> Option<ObjectOrigin> {
        match self.first_candidate(ctx, access) {
            Some(candidate) => Some(candidate_to_origin(candidate, access)),
            None => {
                trace!("[RESOLVE] '{}' -> unresolved", access.name);
                ctx.collect_error(ResolutionError::new(
                    access.clone(),
                    ErrorReason::UnresolvedReference,
                ));
                None
            }
        }
    }

    /// Resolve an assignment's left-hand side to a mutable target.
    ///
    /// Only the top-priority candidate is inspected: a shadowing local or
    /// external makes the target invalid rather than falling through to an
    /// outer property. An empty candidate sequence returns `None` without a
    /// diagnostic; whether that is an error is the caller's call.
    pub fn resolve_to_assignable(
        &self,
        ctx: &mut AnalysisContext<'_>,
        access: &PropertyAccess,
    ) -> Option<PropertyTarget> {
        match self.first_candidate(ctx, access)? {
            ResolutionCandidate::LocalValue(binding) => {
                trace!("[ASSIGN] '{}' -> rejected, local val", access.name);
                ctx.collect_error(ResolutionError::new(
                    access.clone(),
                    ErrorReason::ValReassignment(binding),
                ));
                None
            }
            ResolutionCandidate::External(object) => {
                trace!("[ASSIGN] '{}' -> rejected, external", access.name);
                ctx.collect_error(ResolutionError::new(
                    access.clone(),
                    ErrorReason::ExternalReassignment(object),
                ));
                None
            }
            ResolutionCandidate::Property { receiver, property } => {
                Some(PropertyTarget { receiver, property })
            }
        }
    }

    // ============================================================
    // Candidate generation
    // ============================================================

    fn first_candidate(
        &self,
        ctx: &mut AnalysisContext<'_>,
        access: &PropertyAccess,
    ) -> Option<ResolutionCandidate> {
        match access.receiver.as_deref() {
            None => self.first_unqualified_candidate(ctx, access),
            Some(receiver) => self.first_qualified_candidate(ctx, access, receiver),
        }
    }

    /// Unqualified access: walk the scope stack innermost to outermost. Per
    /// scope, a local binding is checked before the receiver's properties, so
    /// a local wins under first-match consumption. Imports come last.
    fn first_unqualified_candidate(
        &self,
        ctx: &AnalysisContext<'_>,
        access: &PropertyAccess,
    ) -> Option<ResolutionCandidate> {
        let name = access.name.as_str();
        for scope in ctx.scopes_innermost_first() {
            if let Some(binding) = scope.find_local(name) {
                trace!("[RESOLVE] '{}' -> local value", name);
                return Some(ResolutionCandidate::LocalValue(Arc::clone(binding)));
            }
            let receiver = scope.receiver();
            let property = receiver
                .data_type(ctx.schema())
                .and_then(|data_type| data_type.property(name))
                .cloned();
            if let Some(property) = property {
                trace!("[RESOLVE] '{}' -> scope receiver property", name);
                return Some(ResolutionCandidate::Property {
                    receiver: receiver.clone(),
                    property,
                });
            }
        }

        let fq_name = ctx.imports().fq_name_of(name)?;
        let object = ctx.schema().external_object(fq_name)?;
        trace!("[RESOLVE] '{}' -> imported external '{}'", name, fq_name);
        Some(ResolutionCandidate::External(Arc::clone(object)))
    }

    /// Qualified access: a property of the resolved receiver first; failing
    /// that, the whole access read as a fully qualified external name, which
    /// only applies to pure chains.
    fn first_qualified_candidate(
        &self,
        ctx: &mut AnalysisContext<'_>,
        access: &PropertyAccess,
        receiver_expr: &Expr,
    ) -> Option<ResolutionCandidate> {
        let name = access.name.as_str();

        let receiver_origin = self
            .expression_resolver
            .resolve_expression(ctx, receiver_expr);
        if let Some(receiver_origin) = receiver_origin {
            let property = receiver_origin
                .data_type(ctx.schema())
                .and_then(|data_type| data_type.property(name))
                .cloned();
            if let Some(property) = property {
                trace!("[RESOLVE] '{}' -> receiver property", name);
                return Some(ResolutionCandidate::Property {
                    receiver: receiver_origin,
                    property,
                });
            }
        }

        let chain = access.as_access_chain()?;
        let fq_name = chain.as_fq_name();
        let object = ctx.schema().external_object(&fq_name)?;
        trace!("[RESOLVE] '{}' -> external chain '{}'", name, fq_name);
        Some(ResolutionCandidate::External(Arc::clone(object)))
    }
}

fn candidate_to_origin(
    candidate: ResolutionCandidate,
    access: &PropertyAccess,
) -> ObjectOrigin {
    match candidate {
        ResolutionCandidate::LocalValue(binding) => ObjectOrigin::FromLocalValue(binding),
        ResolutionCandidate::Property { receiver, property } => ObjectOrigin::PropertyReference {
            receiver: Box::new(receiver),
            property,
            access: access.clone(),
        },
        ResolutionCandidate::External(object) => ObjectOrigin::External {
            object,
            access: access.clone(),
        },
    }
}
