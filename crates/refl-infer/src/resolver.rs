//! Recursive translation of docblock type expressions into semantic types.

use refl_docblock::{Docblock, TypeExpr};
use refl_types::{ClassName, Placeholder, Placeholders, ScalarKind, Type};
use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::scope::ReflectionContext;

/// Engine-facing contract for docblock type resolvers.
pub trait DocblockTypeResolver {
    /// The declared return type of the documented entity.
    fn resolve_return(&self) -> Result<Type, ResolveError>;

    /// The merged, finalized placeholder registry for this context.
    fn placeholders(&self) -> &Placeholders;
}

/// Resolves the type declarations of one docblock against one reflection
/// context.
///
/// Construction eagerly builds the placeholder registry from the docblock's
/// `@template` declarations, merged with the owning class's placeholders
/// when the context is a class member. The resolver holds no mutable state
/// afterwards; distinct resolvers share nothing and may run in parallel.
pub struct TypeResolver<'a> {
    docblock: &'a Docblock,
    context: &'a dyn ReflectionContext,
    placeholders: Placeholders,
}

impl<'a> TypeResolver<'a> {
    pub fn new(
        context: &'a dyn ReflectionContext,
        docblock: &'a Docblock,
    ) -> Result<Self, ResolveError> {
        let placeholders = build_placeholders(context, docblock)?;
        trace!(count = placeholders.len(), "built placeholder registry");
        Ok(TypeResolver {
            docblock,
            context,
            placeholders,
        })
    }

    /// The declared return type: the first `@return` tag wins and later tags
    /// are ignored. Without any `@return` tag the type is
    /// [`Type::Undefined`].
    pub fn resolve_return(&self) -> Result<Type, ResolveError> {
        for tag in self.docblock.return_tags() {
            return self.resolve_type(&tag.type_expr);
        }

        Ok(Type::Undefined)
    }

    /// The merged, finalized placeholder registry for this context.
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Translate one syntactic type expression into its semantic type.
    pub fn resolve_type(&self, node: &TypeExpr) -> Result<Type, ResolveError> {
        resolve(self.context, &self.placeholders, node)
    }
}

impl DocblockTypeResolver for TypeResolver<'_> {
    fn resolve_return(&self) -> Result<Type, ResolveError> {
        TypeResolver::resolve_return(self)
    }

    fn placeholders(&self) -> &Placeholders {
        TypeResolver::placeholders(self)
    }
}

/// Build the registry from the docblock's `@template` declarations, in
/// source order.
///
/// Registry construction is a single pass: every constraint is resolved
/// before any placeholder is registered, so a constraint cannot refer to a
/// placeholder declared in the same docblock, not even an earlier one. Such
/// a reference falls through to ordinary class-name resolution instead.
fn build_placeholders(
    context: &dyn ReflectionContext,
    docblock: &Docblock,
) -> Result<Placeholders, ResolveError> {
    let unbound = Placeholders::empty();
    let mut placeholders = Placeholders::empty();
    for tag in docblock.template_tags() {
        let constraint = match &tag.constraint {
            Some(node) => Some(resolve(context, &unbound, node)?),
            None => None,
        };
        placeholders.insert(Placeholder::new(tag.placeholder.clone(), constraint));
    }

    if context.is_member() {
        placeholders = placeholders.merge(context.owning_class_placeholders());
    }

    Ok(placeholders)
}

/// The recursive dispatch. Exhaustive over the closed [`TypeExpr`] union;
/// shapes no arm accepts fail with [`ResolveError::UnsupportedType`].
fn resolve(
    context: &dyn ReflectionContext,
    placeholders: &Placeholders,
    node: &TypeExpr,
) -> Result<Type, ResolveError> {
    trace!(kind = node.kind_name(), "resolving type expression");

    match node {
        TypeExpr::Scalar { name } => match name.as_str() {
            "string" => Ok(Type::Scalar(ScalarKind::String)),
            "int" => Ok(Type::Scalar(ScalarKind::Integer)),
            "float" => Ok(Type::Scalar(ScalarKind::Float)),
            "mixed" => Ok(Type::Mixed),
            // `bool` and every other scalar-looking name is not modeled.
            _ => Err(unsupported(node)),
        },
        TypeExpr::ArrayMarker => Ok(Type::array()),
        TypeExpr::Generic { subject, arguments } => {
            resolve_generic(context, placeholders, node, subject, arguments)
        }
        TypeExpr::Union { members } => {
            let members = members
                .iter()
                .map(|member| resolve(context, placeholders, member))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Type::Union { members })
        }
        TypeExpr::ClassRef {
            name,
            fully_qualified,
        } => {
            if let Some(placeholder) = placeholders.get(name) {
                return Ok(Type::Templated {
                    placeholder: placeholder.name().to_string(),
                    constraint: placeholder.constraint().cloned().map(Box::new),
                });
            }

            if *fully_qualified {
                // Written from the namespace root: taken as is, the scope is
                // not consulted.
                return Ok(Type::Class(ClassName::from_string(name)));
            }

            let resolved = context.scope().resolve_fully_qualified_name(name)?;
            Ok(Type::Class(resolved))
        }
    }
}

fn resolve_generic(
    context: &dyn ReflectionContext,
    placeholders: &Placeholders,
    node: &TypeExpr,
    subject: &TypeExpr,
    arguments: &[TypeExpr],
) -> Result<Type, ResolveError> {
    match subject {
        TypeExpr::ArrayMarker => {
            let mut resolved = arguments
                .iter()
                .map(|argument| resolve(context, placeholders, argument))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter();
            match (resolved.next(), resolved.next(), resolved.next()) {
                (Some(value), None, _) => Ok(Type::array_of(value)),
                (Some(key), Some(value), None) => Ok(Type::map_of(key, value)),
                _ => Err(unsupported(node)),
            }
        }
        TypeExpr::ClassRef { .. } => {
            // The subject goes through the same dispatch, so a placeholder
            // subject yields a templated base.
            let base = resolve(context, placeholders, subject)?;
            let resolved = arguments
                .iter()
                .map(|argument| resolve(context, placeholders, argument))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Type::Generic {
                base: Box::new(base),
                arguments: resolved,
            })
        }
        _ => Err(unsupported(node)),
    }
}

fn unsupported(node: &TypeExpr) -> ResolveError {
    debug!(kind = node.kind_name(), "unsupported type expression");
    ResolveError::unsupported(node)
}
