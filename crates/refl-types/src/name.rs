//! Fully-qualified class names.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Separator between namespace segments in a written class name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// A class-like name, stored fully qualified without the root separator.
///
/// Equality and hashing consider the normalized name only; whether the
/// written form carried an explicit root separator is kept as metadata for
/// resolution decisions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassName {
    name: String,
    fully_qualified: bool,
}

impl ClassName {
    /// Parse a written class name, normalizing an explicit root-separator
    /// prefix away while recording that it was present.
    pub fn from_string(written: &str) -> Self {
        let fully_qualified = written.starts_with(NAMESPACE_SEPARATOR);
        ClassName {
            name: written.trim_start_matches(NAMESPACE_SEPARATOR).to_string(),
            fully_qualified,
        }
    }

    /// Whether the written form was anchored at the namespace root.
    pub fn was_fully_qualified(&self) -> bool {
        self.fully_qualified
    }

    /// The normalized fully-qualified name.
    pub fn full_name(&self) -> &str {
        &self.name
    }

    /// The final segment of the name.
    pub fn short_name(&self) -> &str {
        self.name
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&self.name)
    }
}

impl PartialEq for ClassName {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassName {}

impl Hash for ClassName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for ClassName {
    fn from(written: &str) -> Self {
        ClassName::from_string(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_separator_is_normalized_but_remembered() {
        let qualified = ClassName::from_string("\\Acme\\Widget");
        let bare = ClassName::from_string("Acme\\Widget");

        assert!(qualified.was_fully_qualified());
        assert!(!bare.was_fully_qualified());
        assert_eq!(qualified, bare);
        assert_eq!(qualified.full_name(), "Acme\\Widget");
    }

    #[test]
    fn short_name_is_the_final_segment() {
        assert_eq!(ClassName::from_string("Acme\\Widget").short_name(), "Widget");
        assert_eq!(ClassName::from_string("Widget").short_name(), "Widget");
    }
}
