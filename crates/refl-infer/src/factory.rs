//! Construction of symbol records from source nodes.

use refl_common::{SourceNode, Span, Token};
use refl_types::{Type, Value};
use tracing::trace;

use crate::symbol::{Symbol, SymbolInformation, SymbolKind};

/// Options for [`SymbolFactory::symbol`]. Unset fields keep their defaults.
#[derive(Copy, Clone, Debug, Default)]
pub struct SymbolOptions {
    /// Kind recorded on the symbol.
    pub symbol_type: SymbolKind,
    /// Narrow the symbol to a sub-token of the node instead of its full
    /// span.
    pub token: Option<Token>,
}

/// Options for [`SymbolFactory::information`].
///
/// Presence of `ty`, `class_type` and `value` is tracked by the `Option`,
/// never by inspecting the value itself: a supplied `Value::Int(0)` or
/// `Value::Bool(false)` is a present value.
#[derive(Clone, Debug, Default)]
pub struct InformationOptions {
    pub symbol_type: SymbolKind,
    pub token: Option<Token>,
    /// Inferred type of the entity.
    pub ty: Option<Type>,
    /// Type of the class declaring the entity.
    pub class_type: Option<Type>,
    /// Literal value observed for the entity.
    pub value: Option<Value>,
}

/// Shapes [`Symbol`] and [`SymbolInformation`] records for reflected nodes.
///
/// The factory never validates its inputs. It derives names and positions
/// from the node (or a narrower token) and layers on the facts the caller
/// already holds.
pub struct SymbolFactory;

impl SymbolFactory {
    /// Identity record for a node, optionally narrowed to a sub-token.
    ///
    /// With a token the name is the token's slice of the node's source and
    /// the position is `[token.start, token.start + token.length)`. Without
    /// one, both come from the node itself.
    pub fn symbol(node: &dyn SourceNode, options: SymbolOptions) -> Symbol {
        Symbol::new(
            options.symbol_type,
            Self::name(node, options.token),
            Self::position(node, options.token),
        )
    }

    /// Full record for a node: the base symbol plus every fact supplied in
    /// `options`. Absent options leave the builder defaults untouched.
    pub fn information(node: &dyn SourceNode, options: InformationOptions) -> SymbolInformation {
        let symbol = Self::symbol(
            node,
            SymbolOptions {
                symbol_type: options.symbol_type,
                token: options.token,
            },
        );
        trace!(name = symbol.name(), kind = symbol.kind().as_str(), "building symbol information");

        let mut information = SymbolInformation::for_symbol(symbol);

        if let Some(ty) = options.ty {
            information = information.with_type(ty);
        }

        if let Some(class_type) = options.class_type {
            information = information.with_class_type(class_type);
        }

        if let Some(value) = options.value {
            information = information.with_value(value);
        }

        information
    }

    fn name(node: &dyn SourceNode, token: Option<Token>) -> String {
        match token {
            Some(token) => token.text(node.source()).to_string(),
            None => node.text().to_string(),
        }
    }

    fn position(node: &dyn SourceNode, token: Option<Token>) -> Span {
        match token {
            Some(token) => token.span(),
            None => node.span(),
        }
    }
}
