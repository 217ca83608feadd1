//! Common types for the refl reflection engine.
//!
//! This crate provides the foundational source-location types used across
//! all refl crates:
//! - Source spans (`Span`, byte offsets)
//! - Sub-node tokens (`Token`)
//! - The source parser contract (`SourceNode`)

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Contract with the external source-code parser
pub mod source;
pub use source::{SourceNode, Token};
