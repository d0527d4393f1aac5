//! Declarations the generator supplies itself.

use indexmap::IndexSet;

use gots_core::bindings::{Alias, Declaration, Expression, Identifier, Keyword};

/// Name of TypeScript's built-in map type.
pub const RECORD: &str = "Record";

/// TypeScript globals that generated code may reference without declaring.
pub const TYPESCRIPT_GLOBALS: &[&str] = &[
    RECORD, "Array", "ReadonlyArray", "Readonly", "Partial", "Required", "Map", "Set", "Date",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `comparable` constraint: `string | number | boolean`.
    Comparable,
}

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Comparable => "Comparable",
        }
    }

    pub fn reference(self) -> Expression {
        Expression::builtin(self.name(), Vec::new())
    }

    pub fn declaration(self) -> Declaration {
        match self {
            Builtin::Comparable => Declaration::Alias(Alias {
                name: Identifier::new(self.name()),
                modifiers: Vec::new(),
                type_params: Vec::new(),
                ty: Expression::union(vec![
                    Expression::keyword(Keyword::String),
                    Expression::keyword(Keyword::Number),
                    Expression::keyword(Keyword::Boolean),
                ]),
                source: None,
                comments: Vec::new(),
            }),
        }
    }
}

/// Builtins requested during one conversion, emitted once at the end.
#[derive(Clone, Debug, Default)]
pub struct Builtins {
    used: IndexSet<Builtin>,
}

impl Builtins {
    pub fn require(&mut self, builtin: Builtin) -> Expression {
        self.used.insert(builtin);
        builtin.reference()
    }

    pub fn used(&self) -> impl Iterator<Item = Builtin> + '_ {
        self.used.iter().copied()
    }
}
