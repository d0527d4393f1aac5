use gots_core::bindings::{Declaration, Modifier};
use gots_core::source::SourceType;

use super::{ALL, ExportTypes, InterfaceToType, Mutation, ReadOnly, by_name};
use crate::store::Typescript;
use crate::test_utils::*;
use crate::{Error, Result};

fn account() -> Typescript {
    convert(vec![
        type_decl("Base", structure(vec![field("ID", string(), r#"json:"id""#)])),
        type_decl(
            "Account",
            structure(vec![
                embedded("Base", named(PKG, "Base")),
                field("Tags", SourceType::slice(string()), r#"json:"tags""#),
                field(
                    "Owner",
                    structure(vec![field("Name", string(), r#"json:"name""#)]),
                    r#"json:"owner""#,
                ),
            ]),
        ),
        type_decl("Names", SourceType::slice(string())),
    ])
}

#[test]
fn every_listed_name_resolves() {
    for name in ALL {
        let pass = by_name(name).unwrap_or_else(|| panic!("{name} is not registered"));
        assert_eq!(pass.name(), *name);
    }
    assert!(by_name("Nope").is_none());
}

#[test]
fn export_is_idempotent() {
    let mut ts = account();
    ExportTypes.apply(&mut ts).unwrap();
    ExportTypes.apply(&mut ts).unwrap();

    ts.for_each(|key, node| {
        let exports = node
            .modifiers()
            .iter()
            .filter(|m| **m == Modifier::Export)
            .count();
        assert_eq!(exports, 1, "{key}");
    });
}

#[test]
fn readonly_fields_and_arrays() {
    let output = render(account(), vec![Box::new(ReadOnly), Box::new(ReadOnly)]);
    insta::assert_snapshot!(output, @r"
    // Code generated by 'gots'. DO NOT EDIT.

    // From sdk/sdk.go
    interface Account extends Base {
        readonly tags: readonly string[];
        // embedded anonymous struct, please fix by naming it
        readonly owner: unknown;
    }

    // From sdk/sdk.go
    interface Base {
        readonly id: string;
    }

    // From sdk/sdk.go
    type Names = readonly string[];
    ");
}

#[test]
fn interface_to_type_intersects_heritage() {
    let output = render(account(), vec![Box::new(InterfaceToType)]);
    insta::assert_snapshot!(output, @r"
    // Code generated by 'gots'. DO NOT EDIT.

    // From sdk/sdk.go
    type Account = Base & {
        tags: string[];
        // embedded anonymous struct, please fix by naming it
        owner: unknown;
    };

    // From sdk/sdk.go
    type Base = {
        id: string;
    };

    // From sdk/sdk.go
    type Names = string[];
    ");
}

#[test]
fn closures_are_passes() {
    let mut ts = account();
    let drop_names = |ts: &mut Typescript| -> Result<()> {
        ts.remove_node("Names");
        Ok(())
    };
    ts.apply_mutation(&drop_names).unwrap();
    assert!(!ts.contains_key("Names"));
}

#[test]
fn failing_pass_is_named_and_stops_the_run() {
    let mut ts = account();
    let fail = |_: &mut Typescript| -> Result<()> { Err(Error::DuplicateNode("Base".into())) };
    let passes: Vec<Box<dyn Mutation>> = vec![Box::new(fail), Box::new(ExportTypes)];

    let err = ts.apply_mutations(&passes).unwrap_err();

    let Error::Mutation { pass, source } = &err else {
        panic!("unexpected error {err:?}");
    };
    assert!(pass.contains("failing_pass_is_named_and_stops_the_run"), "{pass}");
    assert!(matches!(**source, Error::DuplicateNode(_)));
    assert!(matches!(err.root(), Error::DuplicateNode(_)));
    ts.for_each(|_, node| {
        assert!(!node.modifiers().contains(&Modifier::Export));
    });
}

#[test]
fn interface_to_type_leaves_aliases_alone() {
    let mut ts = account();
    let names = ts.get("Names").cloned();
    InterfaceToType.apply(&mut ts).unwrap();

    assert_eq!(ts.get("Names").cloned(), names);
    ts.for_each(|key, node| {
        assert!(matches!(node, Declaration::Alias(_)), "{key} is a {}", node.kind());
    });
}
