//! Collaborator contracts injected by the host reflection engine.

use refl_types::{ClassName, Placeholders};

use crate::error::ResolveError;

/// The lexical resolution authority for class names.
///
/// Implementations live with the host engine (namespace tables, import
/// maps). The resolver only requires this one lookup; its failures propagate
/// through type resolution unchanged.
pub trait ReflectionScope {
    /// Resolve a partially-qualified class name written in a docblock to its
    /// fully-qualified form for the current context.
    fn resolve_fully_qualified_name(&self, name: &str) -> Result<ClassName, ResolveError>;
}

/// The syntactic entity a docblock is attached to.
///
/// Determines which placeholders are in scope: a class member inherits the
/// placeholders declared on its owning class.
pub trait ReflectionContext {
    /// Scope used to qualify class references written in this context.
    fn scope(&self) -> &dyn ReflectionScope;

    /// Whether this context is a class member (method, property, constant).
    fn is_member(&self) -> bool;

    /// Placeholders declared on the owning class. Only consulted when
    /// `is_member()` returns true.
    fn owning_class_placeholders(&self) -> Placeholders {
        Placeholders::empty()
    }
}
