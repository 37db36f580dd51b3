//! # strata-base
//!
//! Core library for the Strata declarative configuration language: AST types,
//! schema model, and name resolution.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis  → scopes, object origins, property-access resolution, diagnostics
//!   ↓
//! schema    → structural types, external objects, import table
//!   ↓
//! syntax    → expression AST (property access, literals, calls), access chains
//!   ↓
//! base      → primitives (Position, Span, Name, FqName)
//! ```
//!
//! Parsing source text into the [`syntax`] AST and evaluating non-reference
//! expressions are the job of outer layers; this crate answers what a property
//! access *refers to* and whether it is a legal assignment target.

// ============================================================================
// MODULES (dependency order: base → syntax → schema → analysis)
// ============================================================================

/// Foundation types: Position, Span, Name, FqName
pub mod base;

/// Syntax: expression AST, access chains
pub mod syntax;

/// Schema: structural types, external objects, imports
pub mod schema;

/// Semantic analysis: scopes, origins, property-access resolution
pub mod analysis;

// Re-export foundation types
pub use base::{FqName, Name, Position, Span};

// Re-export the resolution surface used by the rest of the analyzer
pub use analysis::{
    AnalysisContext, ErrorCollector, ErrorReason, ExpressionResolver, ObjectOrigin,
    PropertyAccessResolver, PropertyTarget, ResolutionError,
};
