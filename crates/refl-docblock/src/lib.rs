//! Docblock AST contract for the refl reflection engine.
//!
//! The docblock grammar parser is an external collaborator. This crate pins
//! the shape of what it produces:
//! - `Docblock` - the ordered tag list of one documentation comment
//! - `TemplateTag` / `ReturnTag` - the tags the engine interprets
//! - `TypeExpr` - the closed union of syntactic type expressions

pub mod ast;
pub use ast::{Docblock, ReturnTag, Tag, TemplateTag, TypeExpr};
