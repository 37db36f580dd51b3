use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

/// A simple name (identifier). Cheap to clone and compare.
pub type Name = SmolStr;

/// A fully qualified name: a dotted package path plus a simple name.
///
/// The package part may be empty for top-level names. The textual form joins
/// package and name with `.`, e.g. `com.example.plugins` has package
/// `com.example` and simple name `plugins`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FqName {
    package: Name,
    name: Name,
}

/// Error raised when a qualified name is built from invalid text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("empty qualified name")]
    Empty,
    #[error("invalid identifier segment: '{0}'")]
    InvalidSegment(String),
}

impl FqName {
    pub fn new(package: impl Into<Name>, name: impl Into<Name>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Parse a dotted path like `com.example.plugins` into package + name.
    /// Every segment must be a valid identifier.
    pub fn parse(dotted: &str) -> Result<Self, NameError> {
        if dotted.is_empty() {
            return Err(NameError::Empty);
        }
        for segment in dotted.split('.') {
            if !is_identifier(segment) {
                return Err(NameError::InvalidSegment(segment.to_string()));
            }
        }
        match dotted.rsplit_once('.') {
            Some((package, name)) => Ok(Self::new(package, name)),
            None => Ok(Self::new("", dotted)),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// Check that a string is a single valid identifier (no dots).
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (unicode_ident::is_xid_start(first) || first == '_')
        && chars.all(unicode_ident::is_xid_continue)
}
