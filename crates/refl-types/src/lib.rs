//! Semantic type model for the refl reflection engine.
//!
//! This crate defines the semantic types the engine attaches to reflected
//! entities. These are distinct from syntactic type expressions (which live
//! in `refl-docblock`):
//! - `Type` / `ScalarKind` - the closed set of semantic type variants
//! - `ClassName` - normalized fully-qualified class names
//! - `Placeholder` / `Placeholders` - named generic binders and their
//!   per-context registry
//! - `Value` - literal values observed in source

pub mod name;
pub use name::ClassName;

pub mod placeholders;
pub use placeholders::{Placeholder, Placeholders};

pub mod types;
pub use types::{ScalarKind, Type};

pub mod value;
pub use value::Value;
