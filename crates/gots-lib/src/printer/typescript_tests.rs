use gots_core::bindings::{
    Alias, Declaration, Enum, EnumMember, Expression, HeritageClause, Identifier, Keyword,
    LiteralValue, Modifier, OperatorKeyword, PropertySignature, Record, Source, SyntheticComment,
    TypeParameter, VariableStatement,
};

use super::{PrintError, Printer, TypeScriptPrinter};

fn print(decl: impl Into<Declaration>) -> String {
    TypeScriptPrinter::default().print(&decl.into()).unwrap()
}

fn alias(name: &str, ty: Expression) -> Alias {
    Alias {
        name: Identifier::new(name),
        modifiers: Vec::new(),
        type_params: Vec::new(),
        ty,
        source: None,
        comments: Vec::new(),
    }
}

fn reference(name: &str) -> Expression {
    Expression::reference(Identifier::new(name), Vec::new())
}

#[test]
fn interface_with_generics_and_heritage() {
    let mut tags = PropertySignature::new("tags", Expression::array(reference("T")));
    tags.optional = true;
    tags.modifiers.push(Modifier::Readonly);

    let decl = Record {
        name: Identifier::new("Page"),
        modifiers: vec![Modifier::Export],
        type_params: vec![TypeParameter::new(
            Identifier::new("T"),
            Some(reference("Comparable")),
        )],
        heritage: vec![HeritageClause::extends(vec![reference("Base"), reference("Meta")])],
        fields: vec![PropertySignature::new("total", Expression::keyword(Keyword::Number)), tags],
        source: Some(Source {
            file: "sdk/page.go".to_string(),
        }),
        comments: vec![SyntheticComment::leading(" Page is one page of results.")],
    };

    insta::assert_snapshot!(print(decl), @r"
    // From sdk/page.go
    // Page is one page of results.
    export interface Page<T extends Comparable> extends Base, Meta {
        total: number;
        readonly tags?: T[];
    }
    ");
}

#[test]
fn type_parameter_default() {
    let mut param = TypeParameter::new(Identifier::new("T"), None);
    param.default = Some(Expression::keyword(Keyword::Unknown));
    let mut decl = alias("Box", reference("T"));
    decl.type_params.push(param);
    assert_eq!(print(decl), "type Box<T = unknown> = T;");
}

#[test]
fn enum_members_are_comma_separated() {
    let decl = Enum {
        name: Identifier::new("Level"),
        modifiers: Vec::new(),
        members: vec![
            EnumMember {
                name: "Low".to_string(),
                value: Some(Expression::Literal(LiteralValue::Int(1))),
                comments: vec![SyntheticComment::trailing(" lowest")],
            },
            EnumMember {
                name: "High".to_string(),
                value: Some(Expression::Literal(LiteralValue::Int(10))),
                comments: Vec::new(),
            },
            EnumMember {
                name: "Unset".to_string(),
                value: None,
                comments: Vec::new(),
            },
        ],
        source: None,
        comments: Vec::new(),
    };

    insta::assert_snapshot!(print(decl), @r"
    enum Level {
        Low = 1, // lowest
        High = 10,
        Unset
    }
    ");
}

#[test]
fn const_statement() {
    let mut stmt = VariableStatement::constant(
        Identifier::new("Levels"),
        Some(Expression::array(reference("Level"))),
        Expression::ArrayLiteral(vec![
            Expression::Literal(LiteralValue::Float(1.5)),
            Expression::Literal(LiteralValue::Bool(true)),
        ]),
    );
    stmt.modifiers.push(Modifier::Export);
    assert_eq!(
        print(stmt),
        "export const Levels: Level[] = [1.5, true];"
    );
}

#[test]
fn array_operands_are_parenthesized() {
    let nullable = Expression::array(Expression::nullable(Expression::keyword(Keyword::String)));
    assert_eq!(print(alias("A", nullable)), "type A = (string | null)[];");

    let readonly = Expression::readonly(Expression::array(reference("T")));
    assert_eq!(print(alias("B", readonly)), "type B = readonly T[];");

    let nested = Expression::array(Expression::readonly(Expression::array(reference("T"))));
    assert_eq!(print(alias("C", nested)), "type C = (readonly T[])[];");

    let keyof = Expression::Operator {
        keyword: OperatorKeyword::KeyOf,
        inner: Box::new(reference("T")),
    };
    assert_eq!(print(alias("D", keyof)), "type D = keyof T;");
}

#[test]
fn intersection_wraps_unions() {
    let ty = Expression::Intersection(vec![
        reference("Base"),
        Expression::union(vec![reference("A"), reference("B")]),
    ]);
    assert_eq!(print(alias("X", ty)), "type X = Base & (A | B);");
}

#[test]
fn tuple_repeats_element() {
    let ty = Expression::Tuple {
        elem: Box::new(Expression::keyword(Keyword::Number)),
        length: 3,
    };
    assert_eq!(print(alias("Vec3", ty)), "type Vec3 = [number, number, number];");
}

#[test]
fn type_literal_is_indented() {
    let mut inner = PropertySignature::new("id", Expression::keyword(Keyword::String));
    inner.comments.push(SyntheticComment::leading(" primary key"));
    let nested = PropertySignature::new(
        "meta",
        Expression::TypeLiteral(vec![PropertySignature::new(
            "created",
            Expression::keyword(Keyword::String),
        )]),
    );
    let ty = Expression::TypeLiteral(vec![inner, nested]);

    insta::assert_snapshot!(print(alias("Row", ty)), @r"
    type Row = {
        // primary key
        id: string;
        meta: {
            created: string;
        };
    };
    ");
}

#[test]
fn non_identifier_names_are_quoted() {
    let ty = Expression::TypeLiteral(vec![
        PropertySignature::new("content-type", Expression::keyword(Keyword::String)),
        PropertySignature::new("$ref", Expression::keyword(Keyword::String)),
        PropertySignature::new("1st", Expression::keyword(Keyword::String)),
    ]);
    insta::assert_snapshot!(print(alias("Headers", ty)), @r#"
    type Headers = {
        "content-type": string;
        $ref: string;
        "1st": string;
    };
    "#);
}

#[test]
fn string_literals_are_escaped() {
    let ty = Expression::string("say \"hi\"\n");
    assert_eq!(print(alias("S", ty)), r#"type S = "say \"hi\"\n";"#);
}

#[test]
fn multi_line_comment_uses_block_syntax() {
    let mut decl = alias("Doc", Expression::keyword(Keyword::Any));
    decl.comments
        .push(SyntheticComment::from_go("/* first\n second */", true));
    assert_eq!(print(decl), "/* first\n second */\ntype Doc = any;");
}

#[test]
fn non_finite_float_fails() {
    let ty = Expression::Literal(LiteralValue::Float(f64::INFINITY));
    let err = TypeScriptPrinter::default()
        .print(&alias("Inf", ty).into())
        .unwrap_err();
    assert_eq!(err, PrintError::NonFiniteFloat(f64::INFINITY));
}

#[test]
fn empty_name_fails() {
    let err = TypeScriptPrinter::default()
        .print(&alias("", Expression::keyword(Keyword::Any)).into())
        .unwrap_err();
    assert_eq!(err, PrintError::EmptyName);
}
