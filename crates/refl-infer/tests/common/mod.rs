//! Test doubles for the collaborator contracts.

#![allow(dead_code)]

use std::cell::Cell;

use refl_common::{SourceNode, Span};
use refl_infer::{ReflectionContext, ReflectionScope, ResolveError};
use refl_types::{ClassName, Placeholders};

/// Route resolver traces to the test output when a test needs them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Scope that qualifies every name under a fixed namespace, counting
/// lookups.
pub struct RecordingScope {
    namespace: &'static str,
    pub calls: Cell<usize>,
}

impl RecordingScope {
    pub fn new(namespace: &'static str) -> Self {
        RecordingScope {
            namespace,
            calls: Cell::new(0),
        }
    }
}

impl ReflectionScope for RecordingScope {
    fn resolve_fully_qualified_name(&self, name: &str) -> Result<ClassName, ResolveError> {
        self.calls.set(self.calls.get() + 1);
        Ok(ClassName::from_string(&format!(
            "{}\\{}",
            self.namespace, name
        )))
    }
}

/// Scope that fails every lookup.
pub struct ClosedScope;

impl ReflectionScope for ClosedScope {
    fn resolve_fully_qualified_name(&self, name: &str) -> Result<ClassName, ResolveError> {
        Err(ResolveError::unresolved_class(name))
    }
}

/// Context wired to a borrowed scope, optionally a member of a class.
pub struct StubContext<'a> {
    scope: &'a dyn ReflectionScope,
    class_placeholders: Option<Placeholders>,
}

impl<'a> StubContext<'a> {
    /// A free-function context: not a member of anything.
    pub fn function(scope: &'a dyn ReflectionScope) -> Self {
        StubContext {
            scope,
            class_placeholders: None,
        }
    }

    /// A member context whose owning class declares `class_placeholders`.
    pub fn member_of(scope: &'a dyn ReflectionScope, class_placeholders: Placeholders) -> Self {
        StubContext {
            scope,
            class_placeholders: Some(class_placeholders),
        }
    }
}

impl ReflectionContext for StubContext<'_> {
    fn scope(&self) -> &dyn ReflectionScope {
        self.scope
    }

    fn is_member(&self) -> bool {
        self.class_placeholders.is_some()
    }

    fn owning_class_placeholders(&self) -> Placeholders {
        self.class_placeholders.clone().unwrap_or_default()
    }
}

/// A source node backed by an owned source string.
pub struct FakeNode {
    source: String,
    span: Span,
}

impl FakeNode {
    pub fn new(source: impl Into<String>, span: Span) -> Self {
        FakeNode {
            source: source.into(),
            span,
        }
    }
}

impl SourceNode for FakeNode {
    fn span(&self) -> Span {
        self.span
    }

    fn source(&self) -> &str {
        &self.source
    }
}
