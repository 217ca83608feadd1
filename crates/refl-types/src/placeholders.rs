//! Named generic binders and their per-context registry.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use crate::types::Type;

/// A generic placeholder declared with `@template`, optionally constrained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    name: String,
    constraint: Option<Type>,
}

impl Placeholder {
    pub fn new(name: impl Into<String>, constraint: Option<Type>) -> Self {
        Placeholder {
            name: name.into(),
            constraint,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraint(&self) -> Option<&Type> {
        self.constraint.as_ref()
    }
}

/// The placeholders in scope for one resolution context.
///
/// Names are unique and declaration order is preserved. A registry is built
/// once per context and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placeholders {
    entries: IndexMap<String, Placeholder, FxBuildHasher>,
}

impl Placeholders {
    pub fn empty() -> Self {
        Placeholders::default()
    }

    /// Register a placeholder. A duplicate name replaces the earlier entry
    /// while keeping its first-seen position.
    pub fn insert(&mut self, placeholder: Placeholder) {
        self.entries
            .insert(placeholder.name().to_string(), placeholder);
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Placeholder> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholders in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.entries.values()
    }

    /// Combine with another registry. Own entries win on name collision;
    /// entries present only in `other` are appended after them.
    pub fn merge(mut self, other: Placeholders) -> Placeholders {
        for (name, placeholder) in other.entries {
            self.entries.entry(name).or_insert(placeholder);
        }
        self
    }
}

impl FromIterator<Placeholder> for Placeholders {
    fn from_iter<I: IntoIterator<Item = Placeholder>>(iter: I) -> Self {
        let mut placeholders = Placeholders::empty();
        for placeholder in iter {
            placeholders.insert(placeholder);
        }
        placeholders
    }
}
