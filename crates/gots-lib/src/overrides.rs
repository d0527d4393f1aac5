//! Custom type mappings consulted before the default Go type dispatch.
//!
//! Every use site gets its own expression: either a clone of a stored
//! expression or a fresh mapping of a stored Go type.

use indexmap::IndexMap;

use gots_core::bindings::{Expression, Keyword};
use gots_core::source::SourceType;
use gots_core::source::expr::parse_type_expression;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum TypeOverride {
    /// Use this TypeScript expression verbatim.
    Expression(Expression),
    /// Map this Go type instead, e.g. `map[string]string`.
    GoType(SourceType),
}

impl TypeOverride {
    /// Parse a Go type expression. Fails on invalid syntax.
    pub fn parse_go(expr: &str) -> Result<Self> {
        parse_type_expression(expr)
            .map(TypeOverride::GoType)
            .map_err(|source| Error::TypeExpression {
                expr: expr.to_string(),
                source,
            })
    }

    pub fn keyword(keyword: Keyword) -> Self {
        TypeOverride::Expression(Expression::keyword(keyword))
    }

    pub fn nullable(keyword: Keyword) -> Self {
        TypeOverride::Expression(Expression::nullable(Expression::keyword(keyword)))
    }
}

/// Overrides every parser starts with.
pub fn default_overrides() -> IndexMap<String, TypeOverride> {
    IndexMap::from([("error".to_string(), TypeOverride::keyword(Keyword::String))])
}

/// Mappings for common standard library and ecosystem types that marshal to
/// JSON primitives.
pub fn standard_mappings() -> IndexMap<String, TypeOverride> {
    let entries = [
        ("time.Time", TypeOverride::keyword(Keyword::String)),
        ("database/sql.NullTime", TypeOverride::nullable(Keyword::String)),
        ("database/sql.NullString", TypeOverride::nullable(Keyword::String)),
        ("database/sql.NullBool", TypeOverride::nullable(Keyword::Boolean)),
        ("database/sql.NullInt64", TypeOverride::nullable(Keyword::Number)),
        ("database/sql.NullInt32", TypeOverride::nullable(Keyword::Number)),
        ("database/sql.NullInt16", TypeOverride::nullable(Keyword::Number)),
        ("database/sql.NullFloat64", TypeOverride::nullable(Keyword::Number)),
        ("github.com/google/uuid.UUID", TypeOverride::keyword(Keyword::String)),
        ("github.com/google/uuid.NullUUID", TypeOverride::nullable(Keyword::String)),
    ];
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
