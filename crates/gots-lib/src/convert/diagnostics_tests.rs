use super::diagnostics::{ignored_types, package_error_hint};

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn ignore_directive_lists_names() {
    let comments = lines(&[
        "// Package sdk is the client.",
        "// @typescript-ignore Internal, Secret",
        "//@typescript-ignore: Debug",
    ]);
    assert_eq!(ignored_types(&comments), ["Internal", "Secret", "Debug"]);
}

#[test]
fn block_comment_directive_stops_at_close() {
    let comments = lines(&[
        "/* @typescript-ignore Foo */",
        "/*@typescript-ignore: Bar, Baz*/",
        "/*\n @typescript-ignore Qux\n more text\n*/",
    ]);
    assert_eq!(ignored_types(&comments), ["Foo", "Bar", "Baz", "Qux"]);
}

#[test]
fn empty_directive_ignores_nothing() {
    let comments = lines(&["// @typescript-ignore", "// @typescript-ignore ,  ,"]);
    assert!(ignored_types(&comments).is_empty());
}

#[test]
fn missing_import_hint() {
    let hint = package_error_hint("x.go:3:2: could not import github.com/acme/dep (no such package)");
    assert_eq!(
        hint,
        "parsing package, suggest running 'go get github.com/acme/dep' where calling the go generator to include the referenced package."
    );
}

#[test]
fn other_errors_are_generic() {
    assert_eq!(package_error_hint("syntax error"), "parsing package");
}
