//! # Syntax
//!
//! Expression AST for Strata documents, in the shape the parser produces it.
//! Only [`PropertyAccess`] is interpreted by this crate; literals and function
//! calls are opaque receivers evaluated by outer layers.

mod expressions;

pub use expressions::{AccessChain, Expr, FunctionCall, Literal, LiteralValue, PropertyAccess};
