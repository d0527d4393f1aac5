//! Top-level Go objects to declaration nodes.

use tracing::debug;

use gots_core::bindings::{
    Alias, Declaration, EnumMember, Expression, HeritageClause, Identifier, LiteralValue,
    PropertySignature, Record, Source, SyntheticComment, TypeParameter, VariableStatement,
};
use gots_core::source::{
    Comment, ConstDecl, ConstValue, Field, NamedType, Object, Package, Position, SourceType,
    TypeDecl,
};
use gots_core::tags::{self, StructTags};

use super::Converter;
use super::mapper::ParsedType;
use crate::generics;
use crate::references::ObjectRef;
use crate::{Error, Result};

const JSON_TAG: &str = "json";
const TYPESCRIPT_TAG: &str = "typescript";

impl Converter<'_> {
    /// Map one object and store the resulting node.
    ///
    /// Variables and functions have no type-level counterpart and are skipped.
    pub(crate) fn parse(&mut self, package: &Package, object: &Object) -> Result<()> {
        match object {
            Object::TypeName(decl) => self.parse_type(package, decl),
            Object::Const(decl) => self.parse_const(package, decl),
            Object::Var(_) | Object::Func(_) => Ok(()),
        }
    }

    fn parse_type(&mut self, package: &Package, decl: &TypeDecl) -> Result<()> {
        let name = self.parser.identifier(&package.path, &decl.name);
        let key = name.reference();
        let source = source_of(package, decl.position.as_ref());
        let mut comments = doc_comments(&decl.doc);

        let mut type_params = Vec::with_capacity(decl.type_params.len());
        for param in &decl.type_params {
            let parsed = self.typescript_type(&SourceType::TypeParam {
                name: param.name.clone(),
                constraint: Box::new(param.constraint.clone()),
            })?;
            type_params.extend(parsed.type_params);
        }

        match &decl.underlying {
            SourceType::Struct { fields } => {
                let mut record = self.build_record(package, decl, name, fields, type_params)?;
                record.source = source;
                comments.append(&mut record.comments);
                record.comments = comments;
                self.store.set_node(key, record.into())
            }
            SourceType::Basic { .. } => {
                // Constants of this type may already have queued enum members.
                let parsed = self.typescript_type(&decl.underlying)?;
                comments.extend(raised(parsed.raised_comments));
                let alias = Alias {
                    name,
                    modifiers: Vec::new(),
                    type_params: Vec::new(),
                    ty: parsed.value,
                    source,
                    comments,
                };
                self.store.fill_node(key, alias.into())
            }
            SourceType::Map { .. } | SourceType::Slice { .. } | SourceType::Array { .. } => {
                let parsed = self.typescript_type(&decl.underlying)?;
                type_params.extend(parsed.type_params);
                comments.extend(raised(parsed.raised_comments));
                let alias = Alias {
                    name,
                    modifiers: Vec::new(),
                    type_params: generics::simplify(type_params)?,
                    ty: parsed.value,
                    source,
                    comments,
                };
                self.store.set_node(key, alias.into())
            }
            SourceType::Interface { embeddeds, methods } => match embeddeds.as_slice() {
                [constraint] => {
                    let parsed = self.constraint_union(constraint)?;
                    type_params.extend(parsed.type_params);
                    comments.extend(raised(parsed.raised_comments));
                    let alias = Alias {
                        name,
                        modifiers: Vec::new(),
                        type_params: generics::simplify(type_params)?,
                        ty: parsed.value,
                        source,
                        comments,
                    };
                    self.store.set_node(key, alias.into())
                }
                [] => {
                    debug!(
                        pkg = %package.path,
                        name = %decl.name,
                        methods = methods.len(),
                        "skipping behavioral interface"
                    );
                    Ok(())
                }
                _ => Err(Error::unsupported(
                    decl.underlying.describe(),
                    "interfaces with more than one embedded constraint",
                )),
            },
            SourceType::Signature => {
                debug!(pkg = %package.path, name = %decl.name, "skipping function type");
                Ok(())
            }
            SourceType::Named(_) | SourceType::Pointer { .. } => {
                let parsed = self.typescript_type(&decl.underlying)?;
                type_params.extend(parsed.type_params);
                comments.extend(raised(parsed.raised_comments));
                let alias = Alias {
                    name,
                    modifiers: Vec::new(),
                    type_params: generics::simplify(type_params)?,
                    ty: parsed.value,
                    source,
                    comments,
                };
                self.store.set_node(key, alias.into())
            }
            other => Err(Error::unsupported(
                other.describe(),
                "no declaration form for this underlying type",
            )),
        }
    }

    /// A constraint interface's single embedded element as a union.
    fn constraint_union(&mut self, constraint: &SourceType) -> Result<ParsedType> {
        let mut parsed = self.typescript_type(constraint)?;
        if !matches!(parsed.value, Expression::Union(_)) {
            parsed.value = Expression::union(vec![parsed.value]);
        }
        Ok(parsed)
    }

    fn build_record(
        &mut self,
        package: &Package,
        decl: &TypeDecl,
        name: Identifier,
        fields: &[Field],
        mut type_params: Vec<TypeParameter>,
    ) -> Result<Record> {
        let mut extends = Vec::new();
        let mut members = Vec::with_capacity(fields.len());
        let mut comments = Vec::new();

        for field in fields {
            let tags = tags::parse(&field.tag).map_err(|source| Error::StructTag {
                owner: format!("{}.{}", package.path, decl.name),
                field: field.name.clone(),
                source,
            })?;
            let json = tags.get(JSON_TAG);
            let renamed = json.is_some_and(|t| !t.name.is_empty());

            if field.embedded && !renamed {
                let ty = match &field.ty {
                    SourceType::Pointer { elem } => elem.as_ref(),
                    ty => ty,
                };
                let parsed = self.typescript_type(ty)?;
                type_params.extend(parsed.type_params);
                comments.extend(raised(parsed.raised_comments));
                match parsed.value {
                    value @ Expression::Reference(_) => extends.push(value),
                    _ => debug!(
                        owner = %decl.name,
                        field = %field.name,
                        "dropping embedded field without a named type"
                    ),
                }
                continue;
            }

            if !field.is_exported() || is_ignored(&tags) {
                continue;
            }

            let parsed = self.typescript_type(&field.ty)?;
            type_params.extend(parsed.type_params);

            let mut member = PropertySignature::new(field_name(field, &tags), parsed.value);
            member.optional =
                json.is_some_and(|t| t.has_option("omitempty") || t.has_option("omitzero"));
            member.comments = doc_comments(&field.doc);
            member.comments.extend(raised(parsed.raised_comments));
            members.push(member);
        }

        let heritage = if extends.is_empty() {
            Vec::new()
        } else {
            vec![HeritageClause::extends(extends)]
        };

        Ok(Record {
            name,
            modifiers: Vec::new(),
            type_params: generics::simplify(type_params)?,
            heritage,
            fields: members,
            source: None,
            comments,
        })
    }

    fn parse_const(&mut self, package: &Package, decl: &ConstDecl) -> Result<()> {
        let value = Expression::Literal(literal(&decl.value));
        let comments = doc_comments(&decl.doc);

        match &decl.ty {
            SourceType::Named(named) => {
                let Some(type_pkg) = named.package.as_deref() else {
                    return Err(Error::unsupported(
                        named.name.clone(),
                        "constant of a universe type",
                    ));
                };
                let Some(owner) = self.parser.package(type_pkg) else {
                    debug!(
                        pkg = %package.path,
                        name = %decl.name,
                        ty = %named.qualified_name(),
                        "skipping constant of a type outside the converted packages"
                    );
                    return Ok(());
                };
                if self.ignored.contains(&ObjectRef::new(type_pkg, named.name.as_str())) {
                    debug!(pkg = %package.path, name = %decl.name, "skipping constant of ignored type");
                    return Ok(());
                }
                self.ensure_basic(named, owner)?;

                self.references
                    .mark_referenced(&ObjectRef::new(type_pkg, named.name.as_str()));
                let key = self.parser.identifier(type_pkg, &named.name).reference();
                self.queue_enum_member(
                    key,
                    EnumMember {
                        name: decl.name.clone(),
                        value: Some(value),
                        comments,
                    },
                );
                Ok(())
            }
            SourceType::Basic { .. } => {
                let name = self.parser.identifier(&package.path, &decl.name);
                let key = name.reference();
                let mut statement = VariableStatement::constant(name, None, value);
                statement.source = source_of(package, decl.position.as_ref());
                statement.comments = comments;
                self.store.set_node(key, Declaration::from(statement))
            }
            other => Err(Error::unsupported(
                other.describe(),
                "constants must have a basic or named basic type",
            )),
        }
    }

    /// Enum members only attach to named basic types.
    fn ensure_basic(&self, named: &NamedType, owner: &Package) -> Result<()> {
        let underlying = named.underlying.as_deref().or_else(|| {
            owner.lookup(&named.name).and_then(|o| match o {
                Object::TypeName(t) => Some(&t.underlying),
                _ => None,
            })
        });
        match underlying {
            Some(SourceType::Basic { .. }) => Ok(()),
            Some(other) => Err(Error::unsupported(
                format!("{} ({})", named.qualified_name(), other.describe()),
                "constants must have a basic or named basic type",
            )),
            None => Err(Error::unsupported(
                named.qualified_name(),
                "constant type is not declared in its package",
            )),
        }
    }
}

/// The named type a constant belongs to, if any.
pub(crate) fn enum_type_of(decl: &ConstDecl) -> Option<ObjectRef> {
    match &decl.ty {
        SourceType::Named(named) => named
            .package
            .as_deref()
            .map(|pkg| ObjectRef::new(pkg, named.name.as_str())),
        _ => None,
    }
}

fn is_ignored(tags: &StructTags) -> bool {
    let dash = |key| tags.get(key).is_some_and(|t| t.name == "-" && t.options.is_empty());
    dash(JSON_TAG) || dash(TYPESCRIPT_TAG)
}

fn field_name(field: &Field, tags: &StructTags) -> String {
    match tags.get(JSON_TAG) {
        Some(tag) if !tag.name.is_empty() => tag.name.clone(),
        _ => field.name.clone(),
    }
}

fn literal(value: &ConstValue) -> LiteralValue {
    match value {
        ConstValue::Bool(b) => LiteralValue::Bool(*b),
        ConstValue::Int(i) => LiteralValue::Int(*i),
        ConstValue::Float(f) => LiteralValue::Float(*f),
        ConstValue::String(s) => LiteralValue::String(s.clone()),
    }
}

fn source_of(package: &Package, position: Option<&Position>) -> Option<Source> {
    position.map(|pos| Source {
        file: format!("{}/{}", package.name, pos.base_name()),
    })
}

fn doc_comments(doc: &[Comment]) -> Vec<SyntheticComment> {
    doc.iter()
        .map(|c| SyntheticComment::from_go(&c.text, !c.trailing))
        .collect()
}

fn raised(comments: Vec<String>) -> impl Iterator<Item = SyntheticComment> {
    comments
        .into_iter()
        .map(|text| SyntheticComment::leading(format!(" {text}")))
}
