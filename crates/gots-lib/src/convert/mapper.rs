//! Nested Go type occurrences to TypeScript expressions.

use tracing::info;

use gots_core::bindings::{Expression, Identifier, Keyword, TypeParameter};
use gots_core::source::{BasicKind, NamedType, PackageMode, SourceType};

use super::Converter;
use crate::builtins::{Builtin, RECORD};
use crate::generics;
use crate::overrides::TypeOverride;
use crate::references::ObjectRef;
use crate::{Error, Result};

/// Mapped expression plus what it drags along to its owner.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ParsedType {
    pub value: Expression,
    /// Generic parameters used inside `value`.
    pub type_params: Vec<TypeParameter>,
    /// Comments for the nearest owner that accepts them, usually the field.
    pub raised_comments: Vec<String>,
}

impl ParsedType {
    pub fn simple(value: Expression) -> Self {
        Self {
            value,
            type_params: Vec::new(),
            raised_comments: Vec::new(),
        }
    }

    fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.raised_comments.push(comment.into());
        self
    }

    fn absorb(&mut self, other: ParsedType) -> Expression {
        self.type_params.extend(other.type_params);
        self.raised_comments.extend(other.raised_comments);
        other.value
    }
}

impl Converter<'_> {
    pub(crate) fn typescript_type(&mut self, ty: &SourceType) -> Result<ParsedType> {
        match ty {
            SourceType::Basic { name } => basic(*name),
            SourceType::Struct { .. } => Ok(ParsedType::simple(Expression::keyword(
                Keyword::Unknown,
            ))
            .with_comment("embedded anonymous struct, please fix by naming it")),
            SourceType::Map { key, value } => {
                let mut parsed = ParsedType::simple(Expression::Null);
                let key = self.typescript_type(key)?;
                let key = parsed.absorb(key);
                let value = self.typescript_type(value)?;
                let value = parsed.absorb(value);
                parsed.value = Expression::builtin(RECORD, vec![key, value]);
                parsed.type_params = generics::simplify(parsed.type_params)?;
                Ok(parsed)
            }
            SourceType::Slice { elem } | SourceType::Array { elem, .. } => {
                if matches!(elem.as_ref(), SourceType::Basic { name: BasicKind::Byte }) {
                    // Byte slices and arrays are always string[].
                    return Ok(ParsedType::simple(Expression::array(Expression::keyword(
                        Keyword::String,
                    ))));
                }
                let mut parsed = self.typescript_type(elem)?;
                parsed.value = Expression::array(parsed.value);
                Ok(parsed)
            }
            SourceType::Named(named) => self.named_type(named),
            SourceType::Pointer { elem } => {
                let mut parsed = self.typescript_type(elem)?;
                parsed.value = Expression::nullable(parsed.value);
                Ok(parsed)
            }
            SourceType::Interface { embeddeds, methods } => {
                if embeddeds.is_empty() && methods.is_empty() {
                    return Ok(ParsedType::simple(Expression::keyword(Keyword::Unknown))
                        .with_comment("empty interface{} type, falling back to unknown"));
                }
                if let [embedded] = embeddeds.as_slice() {
                    return self.typescript_type(embedded);
                }
                Ok(ParsedType::simple(Expression::keyword(Keyword::Unknown))
                    .with_comment("interface type, falling back to unknown"))
            }
            SourceType::Union { terms } => {
                let mut parsed = ParsedType::simple(Expression::Null);
                let mut arms = Vec::with_capacity(terms.len());
                for term in terms {
                    let arm = self.typescript_type(&term.ty)?;
                    arms.push(parsed.absorb(arm));
                }
                parsed.value = Expression::union(arms);
                Ok(parsed)
            }
            SourceType::TypeParam { name, constraint } => self.type_param(name, constraint),
            SourceType::Signature => Err(Error::unsupported(
                ty.describe(),
                "function values cannot be serialized",
            )),
            SourceType::Chan { .. } => Err(Error::unsupported(
                ty.describe(),
                "channels cannot be serialized",
            )),
        }
    }

    fn named_type(&mut self, named: &NamedType) -> Result<ParsedType> {
        let qualified = named.qualified_name();
        if let Some(parsed) = self.override_for(&qualified)? {
            return Ok(parsed);
        }

        let Some(package) = named.package.as_deref() else {
            return match named.name.as_str() {
                "any" => Ok(ParsedType::simple(Expression::keyword(Keyword::Any))),
                "comparable" => Ok(ParsedType::simple(
                    self.builtins.require(Builtin::Comparable),
                )),
                _ => self.foreign_type(named),
            };
        };

        let parser = self.parser;
        let Some(pkg) = parser.package(package) else {
            return self.foreign_type(named);
        };
        if pkg.lookup(&named.name).is_none() {
            return self.foreign_type(named);
        }

        self.references
            .mark_referenced(&ObjectRef::new(package, named.name.as_str()));
        if pkg.mode == PackageMode::Reference {
            info!(name = %named.name, ext_pkg = %package, "found external type");
        }

        let mut parsed = ParsedType::simple(Expression::Null);
        let mut args = Vec::with_capacity(named.type_args.len());
        for arg in &named.type_args {
            let arg = self.typescript_type(arg)?;
            args.push(parsed.absorb(arg));
        }
        parsed.value = Expression::reference(parser.identifier(package, &named.name), args);
        Ok(parsed)
    }

    /// A named type from a package that is not being converted.
    fn foreign_type(&mut self, named: &NamedType) -> Result<ParsedType> {
        let qualified = named.qualified_name();
        match named.underlying.as_deref() {
            Some(SourceType::Struct { .. }) => Ok(ParsedType::simple(Expression::keyword(
                Keyword::Unknown,
            ))
            .with_comment(format!(
                "external type {qualified:?}, to include this type the package must be explicitly included in the parsing"
            ))),
            Some(underlying) => Ok(self
                .typescript_type(underlying)?
                .with_comment(format!(
                    "this is likely an enum in an external package {qualified:?}"
                ))),
            None => Err(Error::unsupported(
                qualified,
                "named type outside the converted packages has no underlying type",
            )),
        }
    }

    fn override_for(&mut self, key: &str) -> Result<Option<ParsedType>> {
        let parser = self.parser;
        let Some(mapping) = parser.overrides.get(key) else {
            return Ok(None);
        };
        match mapping {
            TypeOverride::Expression(expr) => Ok(Some(ParsedType::simple(expr.clone()))),
            TypeOverride::GoType(ty) => {
                if self.expanding.iter().any(|k| k == key) {
                    return Ok(None);
                }
                self.expanding.push(key.to_string());
                let parsed = self.typescript_type(ty);
                self.expanding.pop();
                parsed.map(Some)
            }
        }
    }

    fn type_param(&mut self, name: &str, constraint: &SourceType) -> Result<ParsedType> {
        let constraint = match constraint {
            SourceType::Named(n) if n.package.is_none() && n.name == "comparable" => {
                self.builtins.require(Builtin::Comparable)
            }
            SourceType::Named(n) if n.package.is_none() && n.name == "any" => {
                Expression::keyword(Keyword::Any)
            }
            SourceType::Interface { embeddeds, methods }
                if embeddeds.is_empty() && methods.is_empty() =>
            {
                Expression::keyword(Keyword::Any)
            }
            SourceType::Interface { embeddeds, .. } if embeddeds.is_empty() => {
                return Err(Error::unsupported(
                    constraint.describe(),
                    "type parameter constraints must be unions or named types",
                ));
            }
            other => self.typescript_type(other)?.value,
        };

        let ident = Identifier::new(name);
        Ok(ParsedType {
            value: Expression::reference(ident.clone(), Vec::new()),
            type_params: vec![TypeParameter::new(ident, Some(constraint))],
            raised_comments: Vec::new(),
        })
    }
}

fn basic(kind: BasicKind) -> Result<ParsedType> {
    let keyword = if kind.is_numeric() {
        Keyword::Number
    } else if kind.is_boolean() {
        Keyword::Boolean
    } else if kind.is_string() {
        Keyword::String
    } else if kind == BasicKind::Invalid {
        return Ok(ParsedType::simple(Expression::keyword(Keyword::Any)).with_comment(
            "Invalid type, using 'any'. Might be a reference to any external package",
        ));
    } else {
        return Err(Error::unsupported(
            format!("{kind:?}").to_lowercase(),
            "basic kind has no JSON representation",
        ));
    };
    Ok(ParsedType::simple(Expression::keyword(keyword)))
}
