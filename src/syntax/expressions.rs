use crate::base::{FqName, Name, Span};

/// An expression node as produced by the parser.
///
/// The analyzer only interprets [`Expr::PropertyAccess`]; the other forms are
/// carried so that receivers like `f().x` are representable (and correctly
/// fail the access-chain test).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    PropertyAccess(PropertyAccess),
    Literal(Literal),
    FunctionCall(FunctionCall),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::PropertyAccess(access) => access.span,
            Expr::Literal(literal) => literal.span,
            Expr::FunctionCall(call) => call.span,
        }
    }
}

/// A reference to a name, either bare (`plugins`) or through a receiver
/// expression (`project.plugins`). Immutable once produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAccess {
    /// Receiver expression; `None` means an unqualified access.
    pub receiver: Option<Box<Expr>>,
    pub name: Name,
    pub span: Span,
}

impl PropertyAccess {
    pub fn unqualified(name: impl Into<Name>, span: Span) -> Self {
        Self {
            receiver: None,
            name: name.into(),
            span,
        }
    }

    pub fn qualified(receiver: Expr, name: impl Into<Name>, span: Span) -> Self {
        Self {
            receiver: Some(Box::new(receiver)),
            name: name.into(),
            span,
        }
    }

    pub fn is_unqualified(&self) -> bool {
        self.receiver.is_none()
    }

    /// View this access as a pure dotted identifier path (`a.b.c`), if it is
    /// one. Any non-access expression anywhere in the receiver chain (such as
    /// a call in `f().x`) makes the whole access not a chain.
    pub fn as_access_chain(&self) -> Option<AccessChain> {
        let mut parts = vec![self.name.clone()];
        let mut current = self.receiver.as_deref();
        while let Some(receiver) = current {
            let Expr::PropertyAccess(access) = receiver else {
                return None;
            };
            parts.push(access.name.clone());
            current = access.receiver.as_deref();
        }
        parts.reverse();
        Some(AccessChain { parts })
    }
}

/// A literal constant. Opaque to resolution; only its type matters here.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Boolean(bool),
    Int(i32),
    Long(i64),
    String(String),
}

/// A function or factory invocation. Opaque to resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Name,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// A property access that consists solely of nested property accesses on
/// identifiers. Derived on demand via [`PropertyAccess::as_access_chain`].
#[derive(Debug, Clone, PartialEq)]
pub struct AccessChain {
    parts: Vec<Name>,
}

impl AccessChain {
    pub fn parts(&self) -> &[Name] {
        &self.parts
    }

    /// Interpret the chain as a fully qualified name: all segments but the
    /// last form the package, the last is the simple name.
    pub fn as_fq_name(&self) -> FqName {
        let (name, package) = self
            .parts
            .split_last()
            .expect("access chain has at least one part");
        FqName::new(package.join("."), name.clone())
    }
}
