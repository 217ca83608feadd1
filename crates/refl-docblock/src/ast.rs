//! Docblock tags and type expressions.

use serde::{Deserialize, Serialize};

/// A parsed documentation comment: its tags, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docblock {
    tags: Vec<Tag>,
}

impl Docblock {
    pub fn new(tags: Vec<Tag>) -> Self {
        Docblock { tags }
    }

    pub fn empty() -> Self {
        Docblock { tags: Vec::new() }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// `@template` declarations in source order.
    pub fn template_tags(&self) -> impl Iterator<Item = &TemplateTag> {
        self.tags.iter().filter_map(|tag| match tag {
            Tag::Template(template) => Some(template),
            _ => None,
        })
    }

    /// `@return` declarations in source order.
    pub fn return_tags(&self) -> impl Iterator<Item = &ReturnTag> {
        self.tags.iter().filter_map(|tag| match tag {
            Tag::Return(ret) => Some(ret),
            _ => None,
        })
    }
}

/// One docblock tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// `@template T` or `@template T of SomeType`
    Template(TemplateTag),
    /// `@return SomeType`
    Return(ReturnTag),
    /// A tag the engine does not interpret (`@deprecated`, `@author`, ...).
    /// Parsers keep these so tag order survives a round trip.
    Unknown { name: String },
}

/// A generic placeholder declaration with an optional constraint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTag {
    pub placeholder: String,
    pub constraint: Option<TypeExpr>,
}

impl TemplateTag {
    pub fn new(placeholder: impl Into<String>, constraint: Option<TypeExpr>) -> Self {
        TemplateTag {
            placeholder: placeholder.into(),
            constraint,
        }
    }
}

/// A declared return type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnTag {
    pub type_expr: TypeExpr,
}

impl ReturnTag {
    pub fn new(type_expr: TypeExpr) -> Self {
        ReturnTag { type_expr }
    }
}

/// A syntactic type expression.
///
/// This is a closed union: resolution dispatches over it exhaustively, so
/// adding or removing a recognized shape is a compile-checked decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A scalar-looking bare name (`string`, `int`, `bool`, ...). The name
    /// is kept verbatim; which names are actually recognized is decided at
    /// resolution time.
    Scalar { name: String },
    /// The bare `array` marker with no type arguments.
    ArrayMarker,
    /// A subject applied to ordered type arguments (`Collection<TKey, TVal>`,
    /// `array<string, Widget>`).
    Generic {
        subject: Box<TypeExpr>,
        arguments: Vec<TypeExpr>,
    },
    /// An ordered `A|B|C` alternation.
    Union { members: Vec<TypeExpr> },
    /// A class-like reference, possibly written from the namespace root.
    ClassRef { name: String, fully_qualified: bool },
}

impl TypeExpr {
    /// Stable kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeExpr::Scalar { .. } => "scalar",
            TypeExpr::ArrayMarker => "array",
            TypeExpr::Generic { .. } => "generic",
            TypeExpr::Union { .. } => "union",
            TypeExpr::ClassRef { .. } => "class-reference",
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        TypeExpr::Scalar { name: name.into() }
    }

    /// An unqualified class reference, to be resolved against a scope.
    pub fn class(name: impl Into<String>) -> Self {
        TypeExpr::ClassRef {
            name: name.into(),
            fully_qualified: false,
        }
    }

    /// A class reference written from the namespace root.
    pub fn fully_qualified_class(name: impl Into<String>) -> Self {
        TypeExpr::ClassRef {
            name: name.into(),
            fully_qualified: true,
        }
    }

    pub fn generic(subject: TypeExpr, arguments: Vec<TypeExpr>) -> Self {
        TypeExpr::Generic {
            subject: Box::new(subject),
            arguments,
        }
    }

    pub fn union(members: Vec<TypeExpr>) -> Self {
        TypeExpr::Union { members }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_accessors_preserve_source_order() {
        let docblock = Docblock::new(vec![
            Tag::Unknown {
                name: "deprecated".to_string(),
            },
            Tag::Template(TemplateTag::new("T", None)),
            Tag::Return(ReturnTag::new(TypeExpr::scalar("int"))),
            Tag::Template(TemplateTag::new("U", None)),
            Tag::Return(ReturnTag::new(TypeExpr::scalar("string"))),
        ]);

        let templates: Vec<_> = docblock
            .template_tags()
            .map(|tag| tag.placeholder.as_str())
            .collect();
        assert_eq!(templates, ["T", "U"]);

        let returns: Vec<_> = docblock.return_tags().collect();
        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].type_expr, TypeExpr::scalar("int"));
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(TypeExpr::scalar("bool").kind_name(), "scalar");
        assert_eq!(TypeExpr::ArrayMarker.kind_name(), "array");
        assert_eq!(TypeExpr::class("Widget").kind_name(), "class-reference");
        assert_eq!(
            TypeExpr::union(vec![TypeExpr::scalar("int")]).kind_name(),
            "union"
        );
        assert_eq!(
            TypeExpr::generic(TypeExpr::ArrayMarker, vec![TypeExpr::scalar("int")]).kind_name(),
            "generic"
        );
    }
}
