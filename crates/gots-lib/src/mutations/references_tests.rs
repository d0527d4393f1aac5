use gots_core::bindings::{
    Alias, Declaration, Expression, HeritageClause, Identifier, Keyword, PropertySignature, Record,
    TypeParameter,
};

use super::{MissingReferencesToAny, Mutation};
use crate::store::Typescript;
use crate::test_utils::render;

fn reference(name: &str) -> Expression {
    Expression::reference(Identifier::new(name), Vec::new())
}

fn record(name: &str, heritage: Vec<Expression>, fields: Vec<PropertySignature>) -> Declaration {
    Declaration::Record(Record {
        name: Identifier::new(name),
        modifiers: Vec::new(),
        type_params: Vec::new(),
        heritage: vec![HeritageClause::extends(heritage)],
        fields,
        source: None,
        comments: Vec::new(),
    })
}

#[test]
fn unknown_field_reference_becomes_any() {
    let mut ts = Typescript::new();
    ts.set_node("Known", record("Known", Vec::new(), Vec::new()))
        .unwrap();
    ts.set_node(
        "User",
        record(
            "User",
            vec![reference("Known"), reference("Ghost")],
            vec![
                PropertySignature::new("home", reference("Known")),
                PropertySignature::new(
                    "addresses",
                    Expression::array(Expression::nullable(reference("Address"))),
                ),
                PropertySignature::new(
                    "meta",
                    Expression::builtin(
                        "Record",
                        vec![Expression::keyword(Keyword::String), reference("Meta")],
                    ),
                ),
            ],
        ),
    )
    .unwrap();

    insta::assert_snapshot!(render(ts, vec![Box::new(MissingReferencesToAny)]), @r"
    // Code generated by 'gots'. DO NOT EDIT.

    interface Known {
    }

    // Reference to unknown type Ghost replaced with 'any'
    interface User extends Known {
        home: Known;
        // Reference to unknown type Address replaced with 'any'
        addresses: (any | null)[];
        // Reference to unknown type Meta replaced with 'any'
        meta: Record<string, any>;
    }
    ");
}

#[test]
fn type_parameters_are_in_scope() {
    let mut ts = Typescript::new();
    let original = Alias {
        name: Identifier::new("Page"),
        modifiers: Vec::new(),
        type_params: vec![TypeParameter::new(
            Identifier::new("T"),
            Some(reference("Comparable")),
        )],
        ty: Expression::array(reference("T")),
        source: None,
        comments: Vec::new(),
    };
    ts.set_node("Page", Declaration::Alias(original.clone()))
        .unwrap();

    MissingReferencesToAny.apply(&mut ts).unwrap();

    let Some(Declaration::Alias(alias)) = ts.get("Page") else {
        panic!("Page is not an alias");
    };
    assert_eq!(alias.ty, original.ty);
    assert_eq!(
        alias.type_params[0].constraint,
        Some(Expression::keyword(Keyword::Any))
    );
    assert_eq!(alias.comments.len(), 1);
}

#[test]
fn all_heritage_missing_drops_clause() {
    let mut ts = Typescript::new();
    ts.set_node(
        "Orphan",
        record(
            "Orphan",
            vec![reference("Gone")],
            vec![PropertySignature::new(
                "when",
                Expression::builtin("Date", Vec::new()),
            )],
        ),
    )
    .unwrap();

    MissingReferencesToAny.apply(&mut ts).unwrap();

    let Some(Declaration::Record(record)) = ts.get("Orphan") else {
        panic!("Orphan is not a record");
    };
    assert!(record.heritage.is_empty());
    assert!(record.fields[0].comments.is_empty());
    assert_eq!(
        record.comments[0].text,
        " Reference to unknown type Gone replaced with 'any'"
    );
}
