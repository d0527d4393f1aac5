use gots_core::bindings::{Expression, Identifier, Keyword};
use gots_core::source::{BasicKind, SourceType};

use super::{Converter, GoParser};
use crate::Error;
use crate::builtins::Builtin;
use crate::test_utils::*;

fn map(ty: &SourceType) -> super::mapper::ParsedType {
    let parser = GoParser::new();
    let mut converter = Converter::new(&parser);
    converter.typescript_type(ty).unwrap()
}

#[test]
fn numeric_kinds_collapse_to_number() {
    use BasicKind::*;
    let kinds = [
        Int, Int8, Int16, Int32, Int64, Uint, Uint8, Uint16, Uint32, Uint64, Uintptr, Float32,
        Float64, Complex64, Complex128, Byte, Rune, UntypedInt, UntypedRune, UntypedFloat,
    ];
    for kind in kinds {
        let parsed = map(&basic(kind));
        assert_eq!(parsed.value, Expression::keyword(Keyword::Number), "{kind:?}");
        assert!(parsed.raised_comments.is_empty());
    }
}

#[test]
fn booleans_and_strings() {
    assert_eq!(map(&basic(BasicKind::Bool)).value, Expression::keyword(Keyword::Boolean));
    assert_eq!(
        map(&basic(BasicKind::UntypedString)).value,
        Expression::keyword(Keyword::String)
    );
}

#[test]
fn invalid_basic_is_any_with_comment() {
    let parsed = map(&basic(BasicKind::Invalid));
    assert_eq!(parsed.value, Expression::keyword(Keyword::Any));
    assert_eq!(
        parsed.raised_comments,
        ["Invalid type, using 'any'. Might be a reference to any external package"]
    );
}

#[test]
fn unsafe_pointer_is_unsupported() {
    let parser = GoParser::new();
    let mut converter = Converter::new(&parser);
    let err = converter
        .typescript_type(&basic(BasicKind::UnsafePointer))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }), "{err:?}");
}

#[test]
fn byte_slice_is_string_array() {
    let parsed = map(&SourceType::slice(basic(BasicKind::Byte)));
    assert_eq!(
        parsed.value,
        Expression::array(Expression::keyword(Keyword::String))
    );

    let parsed = map(&SourceType::Array {
        len: 4,
        elem: Box::new(basic(BasicKind::Int32)),
    });
    assert_eq!(
        parsed.value,
        Expression::array(Expression::keyword(Keyword::Number))
    );
}

#[test]
fn anonymous_struct_is_unknown() {
    let parsed = map(&structure(vec![]));
    assert_eq!(parsed.value, Expression::keyword(Keyword::Unknown));
    assert_eq!(
        parsed.raised_comments,
        ["embedded anonymous struct, please fix by naming it"]
    );
}

#[test]
fn external_named_basic_is_likely_enum() {
    let parsed = map(&foreign("net/http", "ConnState", basic(BasicKind::Int)));
    assert_eq!(parsed.value, Expression::keyword(Keyword::Number));
    assert_eq!(
        parsed.raised_comments,
        [r#"this is likely an enum in an external package "net/http.ConnState""#]
    );
}

#[test]
fn external_named_without_underlying_is_an_error() {
    let parser = GoParser::new();
    let mut converter = Converter::new(&parser);
    let err = converter
        .typescript_type(&named("net/http", "Header"))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }), "{err:?}");
}

#[test]
fn comparable_constraint_uses_builtin() {
    let parsed = map(&type_param("K", universe("comparable")));
    assert_eq!(parsed.value, Expression::reference(Identifier::new("K"), Vec::new()));
    assert_eq!(parsed.type_params.len(), 1);
    assert_eq!(
        parsed.type_params[0].constraint,
        Some(Builtin::Comparable.reference())
    );
}

#[test]
fn empty_constraint_is_any() {
    let parsed = map(&type_param("T", SourceType::empty_interface()));
    assert_eq!(
        parsed.type_params[0].constraint,
        Some(Expression::keyword(Keyword::Any))
    );
}

#[test]
fn generic_map_collects_parameters_once() {
    let k = || type_param("K", universe("comparable"));
    let parsed = map(&SourceType::map(k(), SourceType::slice(k())));
    assert_eq!(parsed.type_params.len(), 1);
    assert_eq!(parsed.type_params[0].name, Identifier::new("K"));
}

#[test]
fn colliding_parameters_are_fatal() {
    let parser = GoParser::new();
    let mut converter = Converter::new(&parser);
    let ty = SourceType::map(
        type_param("K", universe("comparable")),
        type_param("K", universe("any")),
    );
    let err = converter.typescript_type(&ty).unwrap_err();
    assert!(matches!(err, Error::TypeParameterCollision(ref k) if k == "K"));
}

#[test]
fn single_embedded_interface_maps_the_embedded_type() {
    let ty = SourceType::Interface {
        embeddeds: vec![string()],
        methods: Vec::new(),
    };
    assert_eq!(map(&ty).value, Expression::keyword(Keyword::String));

    let ty = SourceType::Interface {
        embeddeds: Vec::new(),
        methods: vec!["String".to_string()],
    };
    let parsed = map(&ty);
    assert_eq!(parsed.value, Expression::keyword(Keyword::Unknown));
    assert_eq!(
        parsed.raised_comments,
        ["interface type, falling back to unknown"]
    );
}

#[test]
fn self_referential_override_stops_expanding() {
    let mut parser = GoParser::new();
    parser
        .include_custom([("github.com/acme/sdk.Tree", "map[string]github.com/acme/sdk.Tree")])
        .unwrap();
    let mut converter = Converter::new(&parser);
    let err = converter
        .typescript_type(&named(PKG, "Tree"))
        .unwrap_err();
    // The inner occurrence falls through to regular dispatch, which knows no
    // such package.
    assert!(matches!(err, Error::UnsupportedType { .. }), "{err:?}");
}
