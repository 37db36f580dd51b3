//! Tests for property-access resolution through the public API.
//!
//! These tests drive [`PropertyAccessResolver`] the way the expression
//! evaluator does in the full analyzer: with an evaluator that recurses back
//! into the resolver for nested property accesses, so qualified receivers are
//! resolved with the same candidate ordering as everything else.

use rstest::rstest;
use strata::analysis::LocalValueBinding;
use strata::schema::{
    AnalysisSchema, DataClass, DataProperty, DataType, ExternalObject, Imports, TypeRef,
};
use strata::syntax::{Expr, Literal, LiteralValue, PropertyAccess};
use strata::{
    AnalysisContext, ErrorReason, ExpressionResolver, FqName, ObjectOrigin,
    PropertyAccessResolver, Span,
};

/// Expression evaluator as the full analyzer wires it: property accesses go
/// back through the resolver, literals become constants, calls are opaque.
struct Evaluator;

impl ExpressionResolver for Evaluator {
    fn resolve_expression(
        &self,
        ctx: &mut AnalysisContext<'_>,
        expr: &Expr,
    ) -> Option<ObjectOrigin> {
        match expr {
            Expr::PropertyAccess(access) => {
                PropertyAccessResolver::new(self).resolve_to_origin(ctx, access)
            }
            Expr::Literal(literal) => Some(ObjectOrigin::Constant {
                literal: literal.clone(),
            }),
            Expr::FunctionCall(_) => None,
        }
    }
}

fn span() -> Span {
    Span::from_coords(0, 0, 0, 10)
}

/// Schema for a small build-configuration document:
///
/// ```text
/// Project { version: String, catalog: Catalog }
/// Catalog { entries: String, version: String }
/// external demo.catalog: Catalog
/// external org.tools.registry: Catalog
/// ```
fn schema() -> AnalysisSchema {
    let mut schema =
        AnalysisSchema::new(TypeRef::Named(FqName::parse("demo.Project").unwrap()));
    schema
        .register_data_class(DataClass::new(
            FqName::parse("demo.Project").unwrap(),
            vec![
                DataProperty::new("version", DataType::String.into()),
                DataProperty::new(
                    "catalog",
                    TypeRef::Named(FqName::parse("demo.Catalog").unwrap()),
                ),
            ],
        ))
        .unwrap();
    schema
        .register_data_class(DataClass::new(
            FqName::parse("demo.Catalog").unwrap(),
            vec![
                DataProperty::new("entries", DataType::String.into()),
                DataProperty::new("version", DataType::String.into()),
            ],
        ))
        .unwrap();
    for fq in ["demo.catalog", "org.tools.registry"] {
        schema
            .register_external(ExternalObject::new(
                FqName::parse(fq).unwrap(),
                TypeRef::Named(FqName::parse("demo.Catalog").unwrap()),
            ))
            .unwrap();
    }
    schema
}

fn top_level_receiver() -> ObjectOrigin {
    ObjectOrigin::TopLevelReceiver {
        type_ref: TypeRef::Named(FqName::parse("demo.Project").unwrap()),
        span: span(),
    }
}

fn dotted_access(parts: &[&str]) -> PropertyAccess {
    let mut expr: Option<Expr> = None;
    for part in parts {
        let access = match expr.take() {
            None => PropertyAccess::unqualified(*part, span()),
            Some(receiver) => PropertyAccess::qualified(receiver, *part, span()),
        };
        expr = Some(Expr::PropertyAccess(access));
    }
    match expr.unwrap() {
        Expr::PropertyAccess(access) => access,
        _ => unreachable!(),
    }
}

fn int_literal(n: i32) -> ObjectOrigin {
    ObjectOrigin::Constant {
        literal: Literal {
            value: LiteralValue::Int(n),
            span: span(),
        },
    }
}

#[test]
fn test_qualified_read_through_imported_receiver() {
    // import deps = demo.catalog; then read `deps.entries`
    let schema = schema();
    let mut imports = Imports::new();
    imports
        .register("deps", FqName::parse("demo.catalog").unwrap())
        .unwrap();
    let mut ctx = AnalysisContext::new(&schema, &imports, top_level_receiver());

    let resolver = PropertyAccessResolver::new(&Evaluator);
    let access = dotted_access(&["deps", "entries"]);

    let origin = resolver.resolve_to_origin(&mut ctx, &access).unwrap();
    match origin {
        ObjectOrigin::PropertyReference {
            receiver, property, ..
        } => {
            assert_eq!(property.name, "entries");
            assert!(matches!(*receiver, ObjectOrigin::External { .. }));
        }
        other => panic!("expected property reference, got {other:?}"),
    }
    assert!(!ctx.errors().has_errors());
}

#[rstest]
#[case(&["demo", "catalog"], "demo.catalog")]
#[case(&["org", "tools", "registry"], "org.tools.registry")]
fn test_pure_chain_resolves_registered_external(
    #[case] parts: &[&str],
    #[case] expected: &str,
) {
    let schema = schema();
    let imports = Imports::new();
    let mut ctx = AnalysisContext::new(&schema, &imports, top_level_receiver());

    let resolver = PropertyAccessResolver::new(&Evaluator);
    let origin = resolver
        .resolve_to_origin(&mut ctx, &dotted_access(parts))
        .unwrap();

    match origin {
        ObjectOrigin::External { object, .. } => {
            assert_eq!(object.fq_name, FqName::parse(expected).unwrap());
        }
        other => panic!("expected external, got {other:?}"),
    }
    // The recursive evaluator reports the receiver segments as unresolved;
    // the chain itself still resolves and nothing else is reported.
    assert!(
        ctx.errors()
            .errors()
            .iter()
            .all(|e| e.reason == ErrorReason::UnresolvedReference)
    );
}

#[test]
fn test_nested_block_resolution_and_shadowing() {
    // version = ...      // assigns Project.version
    // catalog {          // enters a Catalog-receiver scope
    //     val version = 1
    //     version        // reads the local, not Catalog.version
    //     entries        // reads Catalog.entries
    // }
    let schema = schema();
    let imports = Imports::new();
    let mut ctx = AnalysisContext::new(&schema, &imports, top_level_receiver());
    let resolver = PropertyAccessResolver::new(&Evaluator);

    let block_receiver = resolver
        .resolve_to_origin(&mut ctx, &dotted_access(&["catalog"]))
        .unwrap();
    ctx.enter_scope(block_receiver);
    ctx.declare_local(LocalValueBinding::new("version", int_literal(1), span()))
        .unwrap();

    let version = resolver
        .resolve_to_origin(&mut ctx, &dotted_access(&["version"]))
        .unwrap();
    assert!(matches!(version, ObjectOrigin::FromLocalValue(_)));

    let entries = resolver
        .resolve_to_origin(&mut ctx, &dotted_access(&["entries"]))
        .unwrap();
    assert!(matches!(
        entries,
        ObjectOrigin::PropertyReference { ref property, .. } if property.name == "entries"
    ));

    ctx.exit_scope();
    // Back at document level, `version` is the Project property again
    let version = resolver
        .resolve_to_origin(&mut ctx, &dotted_access(&["version"]))
        .unwrap();
    assert!(matches!(version, ObjectOrigin::PropertyReference { .. }));
    assert!(!ctx.errors().has_errors());
}

#[test]
fn test_assignment_targets_inside_block() {
    // The alias deliberately avoids colliding with the receiver's `catalog`
    // property, which would shadow the import.
    let schema = schema();
    let mut imports = Imports::new();
    imports
        .register("deps", FqName::parse("demo.catalog").unwrap())
        .unwrap();
    let mut ctx = AnalysisContext::new(&schema, &imports, top_level_receiver());
    let resolver = PropertyAccessResolver::new(&Evaluator);

    // version = "1.0" resolves to a mutable Project property
    let target = resolver
        .resolve_to_assignable(&mut ctx, &dotted_access(&["version"]))
        .unwrap();
    assert_eq!(target.property.name, "version");

    // deps = ... is a write to an imported external: rejected
    assert!(
        resolver
            .resolve_to_assignable(&mut ctx, &dotted_access(&["deps"]))
            .is_none()
    );
    assert_eq!(ctx.errors().error_count(), 1);
    assert!(matches!(
        &ctx.errors().errors()[0].reason,
        ErrorReason::ExternalReassignment(_)
    ));

    // deps.entries = ... is fine: qualified property target
    let target = resolver
        .resolve_to_assignable(&mut ctx, &dotted_access(&["deps", "entries"]))
        .unwrap();
    assert_eq!(target.property.name, "entries");
    assert_eq!(ctx.errors().error_count(), 1);
}

#[test]
fn test_val_reassignment_reports_the_binding() {
    let schema = schema();
    let imports = Imports::new();
    let mut ctx = AnalysisContext::new(&schema, &imports, top_level_receiver());
    let resolver = PropertyAccessResolver::new(&Evaluator);

    let declared_at = Span::from_coords(3, 4, 3, 20);
    ctx.declare_local(LocalValueBinding::new("pinned", int_literal(1), declared_at))
        .unwrap();

    assert!(
        resolver
            .resolve_to_assignable(&mut ctx, &dotted_access(&["pinned"]))
            .is_none()
    );
    let errors = ctx.take_errors();
    assert_eq!(errors.len(), 1);
    match &errors[0].reason {
        ErrorReason::ValReassignment(binding) => {
            assert_eq!(binding.name, "pinned");
            assert_eq!(binding.assignment_span, declared_at);
        }
        other => panic!("expected val reassignment, got {other:?}"),
    }
}

#[test]
fn test_repeated_resolution_is_deterministic() {
    let schema = schema();
    let imports = Imports::new();
    let mut ctx = AnalysisContext::new(&schema, &imports, top_level_receiver());
    let resolver = PropertyAccessResolver::new(&Evaluator);
    let access = dotted_access(&["version"]);

    let first = resolver.resolve_to_origin(&mut ctx, &access).unwrap();
    let second = resolver.resolve_to_origin(&mut ctx, &access).unwrap();
    assert_eq!(first, second);
    assert!(!ctx.errors().has_errors());
}
