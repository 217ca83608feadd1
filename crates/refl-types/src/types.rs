//! The closed set of semantic type variants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::name::ClassName;

/// Scalar kinds the engine models.
///
/// The set is deliberately narrow. Names outside it (`bool` among them) are
/// not semantic scalars here and fail resolution instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "int",
            ScalarKind::Float => "float",
        }
    }
}

/// A semantic type.
///
/// Values are immutable trees compared structurally; they are built once and
/// shared freely afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    /// Not resolved by any pass yet.
    Unknown,
    /// No declaration present.
    Undefined,
    /// The top type.
    Mixed,
    Scalar(ScalarKind),
    /// An array with optional key and value constraints. Absent arguments
    /// mean unconstrained.
    Array {
        key: Option<Box<Type>>,
        value: Option<Box<Type>>,
    },
    /// A class type applied to ordered type arguments.
    Generic {
        base: Box<Type>,
        arguments: Vec<Type>,
    },
    /// An ordered alternation. Order is as declared; members are not
    /// deduplicated and nested unions are not flattened.
    Union { members: Vec<Type> },
    Class(ClassName),
    /// A use of a generic placeholder bound in the current scope, carrying
    /// the placeholder's declared constraint.
    Templated {
        placeholder: String,
        constraint: Option<Box<Type>>,
    },
}

impl Type {
    pub fn string() -> Self {
        Type::Scalar(ScalarKind::String)
    }

    pub fn integer() -> Self {
        Type::Scalar(ScalarKind::Integer)
    }

    pub fn float() -> Self {
        Type::Scalar(ScalarKind::Float)
    }

    /// An unconstrained array.
    pub fn array() -> Self {
        Type::Array {
            key: None,
            value: None,
        }
    }

    /// An array constrained on values only.
    pub fn array_of(value: Type) -> Self {
        Type::Array {
            key: None,
            value: Some(Box::new(value)),
        }
    }

    /// An array constrained on keys and values.
    pub fn map_of(key: Type, value: Type) -> Self {
        Type::Array {
            key: Some(Box::new(key)),
            value: Some(Box::new(value)),
        }
    }

    pub fn generic(base: Type, arguments: Vec<Type>) -> Self {
        Type::Generic {
            base: Box::new(base),
            arguments,
        }
    }

    pub fn union(members: Vec<Type>) -> Self {
        Type::Union { members }
    }

    pub fn class(name: impl Into<ClassName>) -> Self {
        Type::Class(name.into())
    }

    pub fn templated(placeholder: impl Into<String>, constraint: Option<Type>) -> Self {
        Type::Templated {
            placeholder: placeholder.into(),
            constraint: constraint.map(Box::new),
        }
    }
}

impl From<ClassName> for Type {
    fn from(name: ClassName) -> Self {
        Type::Class(name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unknown => f.write_str("unknown"),
            Type::Undefined => f.write_str("undefined"),
            Type::Mixed => f.write_str("mixed"),
            Type::Scalar(kind) => f.write_str(kind.as_str()),
            Type::Array { key, value } => match (key, value) {
                (None, None) => f.write_str("array"),
                (None, Some(value)) => write!(f, "array<{value}>"),
                (Some(key), Some(value)) => write!(f, "array<{key},{value}>"),
                // Not produced by resolution.
                (Some(key), None) => write!(f, "array<{key}>"),
            },
            Type::Generic { base, arguments } => {
                write!(f, "{base}<")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(">")
            }
            Type::Union { members } => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Type::Class(name) => write!(f, "{name}"),
            Type::Templated { placeholder, .. } => f.write_str(placeholder),
        }
    }
}
