use super::*;

#[test]
fn identifier_reference_applies_prefix() {
    let id = Identifier::qualified("github.com/acme/sdk", "User", "Sdk");
    assert_eq!(id.reference(), "SdkUser");
    assert_eq!(id.to_string(), "SdkUser");
}

#[test]
fn builtin_identifier_has_no_package() {
    let id = Identifier::new("Record");
    assert_eq!(id.reference(), "Record");
    assert_eq!(id.package, None);
}

#[test]
fn go_comment_markers_are_stripped() {
    let line = SyntheticComment::from_go("// hello", true);
    assert_eq!(line.text, " hello");
    assert!(line.single_line);

    let block = SyntheticComment::from_go("/* a\n b */", false);
    assert_eq!(block.text, " a\n b ");
    assert!(!block.single_line);
    assert!(!block.leading);
}

#[test]
fn walk_visits_children_before_parent() {
    let mut expr = Expression::array(Expression::nullable(Expression::keyword(Keyword::String)));
    let mut seen = Vec::new();
    walk_expression_mut(&mut expr, &mut |e| {
        seen.push(match e {
            Expression::Keyword(_) => "keyword",
            Expression::Null => "null",
            Expression::Union(_) => "union",
            Expression::Array(_) => "array",
            _ => "other",
        })
    });
    assert_eq!(seen, ["keyword", "null", "union", "array"]);
}

#[test]
fn walk_replacement_is_not_revisited() {
    let mut expr = Expression::array(Expression::array(Expression::keyword(Keyword::Number)));
    let mut wrapped = 0;
    walk_expression_mut(&mut expr, &mut |e| {
        if matches!(e, Expression::Array(_)) {
            let inner = std::mem::replace(e, Expression::Null);
            *e = Expression::readonly(inner);
            wrapped += 1;
        }
    });
    assert_eq!(wrapped, 2);
    let Expression::Operator { inner, .. } = &expr else {
        panic!("expected readonly operator, got {expr:?}");
    };
    assert!(matches!(inner.as_ref(), Expression::Array(_)));
}

#[test]
fn walk_declaration_reaches_fields_and_params() {
    let mut decl = Declaration::Record(Record {
        name: Identifier::new("Box"),
        modifiers: Vec::new(),
        type_params: vec![TypeParameter::new(
            Identifier::new("T"),
            Some(Expression::keyword(Keyword::Any)),
        )],
        heritage: vec![HeritageClause::extends(vec![Expression::builtin(
            "Base",
            Vec::new(),
        )])],
        fields: vec![PropertySignature::new(
            "value",
            Expression::builtin("T", Vec::new()),
        )],
        source: None,
        comments: Vec::new(),
    });

    let mut refs = Vec::new();
    walk_declaration_mut(&mut decl, &mut |e| {
        if let Some(name) = e.reference_name() {
            refs.push(name.reference());
        }
    });
    assert_eq!(refs, ["Base", "T"]);
}

#[test]
fn literal_kinds() {
    assert!(LiteralValue::Int(1).same_kind(&LiteralValue::Int(2)));
    assert!(!LiteralValue::Int(1).same_kind(&LiteralValue::Float(1.0)));
}
