//! Foundation types for the Strata toolchain.
//!
//! This module provides fundamental types used throughout the analyzer:
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//! - [`Name`] - Cheap clonable identifier strings
//! - [`FqName`] - Fully qualified names (package path + simple name)
//!
//! This module has NO dependencies on other strata modules.

mod names;
mod position;

pub use names::{FqName, Name, NameError};
pub use position::{Position, Span};
