//! Builders for source packages used across tests.

use gots_core::source::{
    BasicKind, Comment, ConstDecl, ConstValue, Field, NamedType, Object, Package, Position,
    SourceType, TypeDecl, TypeParamDecl,
};

use crate::GoParser;
use crate::mutations::Mutation;
use crate::store::Typescript;

pub const PKG: &str = "github.com/acme/sdk";

pub fn package(objects: Vec<Object>) -> Package {
    named_package(PKG, "sdk", objects)
}

pub fn named_package(path: &str, name: &str, objects: Vec<Object>) -> Package {
    let mut pkg = Package::new(path, name);
    pkg.objects = objects;
    pkg
}

fn position(file: &str) -> Option<Position> {
    Some(Position {
        file: format!("/src/{file}"),
        line: 1,
    })
}

pub fn type_decl(name: &str, underlying: SourceType) -> Object {
    Object::TypeName(TypeDecl {
        name: name.to_string(),
        type_params: Vec::new(),
        underlying,
        doc: Vec::new(),
        position: position("sdk.go"),
    })
}

pub fn generic_decl(name: &str, params: &[(&str, SourceType)], underlying: SourceType) -> Object {
    Object::TypeName(TypeDecl {
        name: name.to_string(),
        type_params: params
            .iter()
            .map(|(name, constraint)| TypeParamDecl {
                name: name.to_string(),
                constraint: constraint.clone(),
            })
            .collect(),
        underlying,
        doc: Vec::new(),
        position: position("sdk.go"),
    })
}

pub fn documented(mut object: Object, lines: &[&str]) -> Object {
    let doc = lines
        .iter()
        .map(|text| Comment {
            text: text.to_string(),
            trailing: false,
        })
        .collect();
    match &mut object {
        Object::TypeName(t) => t.doc = doc,
        Object::Const(c) => c.doc = doc,
        Object::Var(_) | Object::Func(_) => {}
    }
    object
}

pub fn const_decl(name: &str, ty: SourceType, value: ConstValue) -> Object {
    Object::Const(ConstDecl {
        name: name.to_string(),
        ty,
        value,
        doc: Vec::new(),
        position: position("sdk.go"),
    })
}

pub fn string_const(name: &str, ty: &str, value: &str) -> Object {
    const_decl(
        name,
        named(PKG, ty),
        ConstValue::String(value.to_string()),
    )
}

pub fn field(name: &str, ty: SourceType, tag: &str) -> Field {
    Field {
        name: name.to_string(),
        ty,
        embedded: false,
        tag: tag.to_string(),
        doc: Vec::new(),
    }
}

pub fn embedded(name: &str, ty: SourceType) -> Field {
    Field {
        embedded: true,
        ..field(name, ty, "")
    }
}

pub fn structure(fields: Vec<Field>) -> SourceType {
    SourceType::Struct { fields }
}

pub fn basic(kind: BasicKind) -> SourceType {
    SourceType::basic(kind)
}

pub fn string() -> SourceType {
    basic(BasicKind::String)
}

pub fn named(package: &str, name: &str) -> SourceType {
    SourceType::named(Some(package), name)
}

pub fn universe(name: &str) -> SourceType {
    SourceType::named(None, name)
}

/// A named type from a package that is not converted, with its underlying
/// type resolved.
pub fn foreign(package: &str, name: &str, underlying: SourceType) -> SourceType {
    SourceType::Named(NamedType {
        underlying: Some(Box::new(underlying)),
        ..NamedType::new(Some(package), name)
    })
}

pub fn instantiated(package: &str, name: &str, args: Vec<SourceType>) -> SourceType {
    SourceType::Named(NamedType {
        type_args: args,
        ..NamedType::new(Some(package), name)
    })
}

pub fn type_param(name: &str, constraint: SourceType) -> SourceType {
    SourceType::TypeParam {
        name: name.to_string(),
        constraint: Box::new(constraint),
    }
}

pub fn convert(objects: Vec<Object>) -> Typescript {
    let mut parser = GoParser::new();
    parser.include_generate(package(objects)).unwrap();
    parser.to_typescript().unwrap()
}

pub fn render(mut ts: Typescript, passes: Vec<Box<dyn Mutation>>) -> String {
    ts.apply_mutations(&passes).unwrap();
    ts.serialize().unwrap()
}

/// Convert one package and serialize it without mutations.
pub fn generate(objects: Vec<Object>) -> String {
    render(convert(objects), Vec::new())
}
