use gots_core::bindings::{Alias, Declaration, Expression, Identifier, Keyword};
use gots_core::source::SourceType;

use super::{Mutation, NotNullMaps, NullUnionSlices, SimplifyOptional};
use crate::store::Typescript;
use crate::test_utils::*;

fn profile() -> Typescript {
    convert(vec![type_decl(
        "Profile",
        structure(vec![
            field(
                "Nick",
                SourceType::pointer(string()),
                r#"json:"nick,omitempty""#,
            ),
            field("Email", SourceType::pointer(string()), r#"json:"email""#),
            field(
                "Labels",
                SourceType::pointer(SourceType::map(string(), string())),
                r#"json:"labels""#,
            ),
            field(
                "Friends",
                SourceType::slice(SourceType::pointer(string())),
                r#"json:"friends""#,
            ),
        ]),
    )])
}

#[test]
fn unmodified_nullability() {
    insta::assert_snapshot!(render(profile(), Vec::new()), @r"
    // Code generated by 'gots'. DO NOT EDIT.

    // From sdk/sdk.go
    interface Profile {
        nick?: string | null;
        email: string | null;
        labels: Record<string, string> | null;
        friends: (string | null)[];
    }
    ");
}

#[test]
fn all_null_passes() {
    let output = render(
        profile(),
        vec![
            Box::new(SimplifyOptional),
            Box::new(NotNullMaps),
            Box::new(NullUnionSlices),
        ],
    );
    insta::assert_snapshot!(output, @r"
    // Code generated by 'gots'. DO NOT EDIT.

    // From sdk/sdk.go
    interface Profile {
        nick?: string;
        email: string | null;
        labels: Record<string, string>;
        friends: string[];
    }
    ");
}

#[test]
fn simplify_optional_reaches_type_literals() {
    let output = render(
        profile(),
        vec![Box::new(super::InterfaceToType), Box::new(SimplifyOptional)],
    );
    insta::assert_snapshot!(output, @r"
    // Code generated by 'gots'. DO NOT EDIT.

    // From sdk/sdk.go
    type Profile = {
        nick?: string;
        email: string | null;
        labels: Record<string, string> | null;
        friends: (string | null)[];
    };
    ");
}

#[test]
fn user_defined_record_is_not_a_map() {
    let mut ts = Typescript::new();
    let user_record = Expression::reference(
        Identifier::qualified(PKG, "Record", ""),
        vec![Expression::keyword(Keyword::String)],
    );
    ts.set_node(
        "Maybe",
        Declaration::Alias(Alias {
            name: Identifier::new("Maybe"),
            modifiers: Vec::new(),
            type_params: Vec::new(),
            ty: Expression::nullable(user_record.clone()),
            source: None,
            comments: Vec::new(),
        }),
    )
    .unwrap();

    NotNullMaps.apply(&mut ts).unwrap();

    let Some(Declaration::Alias(alias)) = ts.get("Maybe") else {
        panic!("Maybe is not an alias");
    };
    assert_eq!(alias.ty, Expression::nullable(user_record));
}

#[test]
fn wider_unions_keep_null() {
    let mut ts = Typescript::new();
    let ty = Expression::array(Expression::union(vec![
        Expression::keyword(Keyword::String),
        Expression::keyword(Keyword::Number),
        Expression::Null,
    ]));
    ts.set_node(
        "Cells",
        Declaration::Alias(Alias {
            name: Identifier::new("Cells"),
            modifiers: Vec::new(),
            type_params: Vec::new(),
            ty: ty.clone(),
            source: None,
            comments: Vec::new(),
        }),
    )
    .unwrap();

    NullUnionSlices.apply(&mut ts).unwrap();

    assert!(matches!(ts.get("Cells"), Some(Declaration::Alias(a)) if a.ty == ty));
}
