//! Resolution failures.

use refl_docblock::TypeExpr;
use thiserror::Error;

/// Failure surfaced while resolving a docblock type expression.
///
/// Neither variant is recovered inside the resolver; both propagate to the
/// caller, which decides whether to surface a diagnostic or substitute
/// `Type::Unknown`. Swallowing them here would make unsupported syntax
/// indistinguishable from an intentionally unconstrained declaration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Resolution exhausted every recognized node-kind/shape combination.
    #[error("could not evaluate node of kind \"{kind}\"")]
    UnsupportedType { kind: String },

    /// The lexical scope could not produce a fully-qualified name.
    /// Constructed by `ReflectionScope` implementations and passed through
    /// resolution unchanged.
    #[error("could not resolve class \"{name}\"")]
    UnresolvedClass { name: String },
}

impl ResolveError {
    /// The standard failure for a node no dispatch arm accepts.
    pub fn unsupported(node: &TypeExpr) -> Self {
        ResolveError::UnsupportedType {
            kind: node.kind_name().to_string(),
        }
    }

    pub fn unresolved_class(name: impl Into<String>) -> Self {
        ResolveError::UnresolvedClass { name: name.into() }
    }
}
