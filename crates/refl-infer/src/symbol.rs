//! Symbol identity and progressively-enriched symbol information.

use refl_common::Span;
use refl_types::{Type, Value};
use serde::{Deserialize, Serialize};

/// Kind of reflected syntactic entity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    #[default]
    Unknown,
    Class,
    Method,
    Property,
    Constant,
    Function,
    Variable,
    Parameter,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Unknown => "unknown",
            SymbolKind::Class => "class",
            SymbolKind::Method => "method",
            SymbolKind::Property => "property",
            SymbolKind::Constant => "constant",
            SymbolKind::Function => "function",
            SymbolKind::Variable => "variable",
            SymbolKind::Parameter => "parameter",
        }
    }
}

/// Minimal identity of a reflected entity: kind, name and source position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    kind: SymbolKind,
    name: String,
    position: Span,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<String>, position: Span) -> Self {
        Symbol {
            kind,
            name: name.into(),
            position,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Span {
        self.position
    }
}

/// A [`Symbol`] enriched with whatever the analysis passes have discovered
/// so far.
///
/// Different passes learn different facts about the same entity at different
/// times, so everything beyond the symbol itself is layered on through the
/// `with_*` constructors. Unset fields keep their defaults: an `Undefined`
/// type, no declaring class, no value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolInformation {
    symbol: Symbol,
    #[serde(rename = "type")]
    ty: Type,
    class_type: Option<Type>,
    value: Option<Value>,
}

impl SymbolInformation {
    /// The base record for a symbol, nothing discovered yet.
    pub fn for_symbol(symbol: Symbol) -> Self {
        SymbolInformation {
            symbol,
            ty: Type::Undefined,
            class_type: None,
            value: None,
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    /// Record the type of the class declaring this member.
    pub fn with_class_type(mut self, class_type: Type) -> Self {
        self.class_type = Some(class_type);
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn class_type(&self) -> Option<&Type> {
        self.class_type.as_ref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
