use tracing::warn;

use gots_core::bindings::{
    Alias, Declaration, Expression, Identifier, Modifier, Reference, VariableStatement,
};

use super::Mutation;
use crate::Result;
use crate::store::Typescript;

/// Replaces every enum with an alias of the union of its member values.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnumAsTypes;

impl Mutation for EnumAsTypes {
    fn name(&self) -> &str {
        "EnumAsTypes"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| {
            let Declaration::Enum(e) = node else {
                return;
            };
            let values = e
                .members
                .iter()
                .map(|m| m.value.clone().unwrap_or_else(|| Expression::string(&m.name)))
                .collect();
            *node = Declaration::Alias(Alias {
                name: e.name.clone(),
                modifiers: std::mem::take(&mut e.modifiers),
                type_params: Vec::new(),
                ty: Expression::union(values),
                source: e.source.take(),
                comments: std::mem::take(&mut e.comments),
            });
        });
        Ok(())
    }
}

/// Strips the enum's own name from the front of each member name.
///
/// A member named exactly like the enum keeps its name.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrimEnumPrefix;

impl Mutation for TrimEnumPrefix {
    fn name(&self) -> &str {
        "TrimEnumPrefix"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| {
            let Declaration::Enum(e) = node else {
                return;
            };
            for member in &mut e.members {
                if let Some(trimmed) = member.name.strip_prefix(e.name.name.as_str())
                    && !trimmed.is_empty()
                {
                    member.name = trimmed.to_string();
                }
            }
        });
        Ok(())
    }
}

/// Adds `const <Name>s: <Name>[] = [...]` for every alias that is a union of
/// literals of one kind.
///
/// Expects enums to be aliases already; see [`EnumAsTypes`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EnumLists;

impl Mutation for EnumLists {
    fn name(&self) -> &str {
        "EnumLists"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        let mut lists = Vec::new();
        let mut enums = 0;
        ts.for_each(|_, node| match node {
            Declaration::Alias(alias) => lists.extend(value_list(alias)),
            Declaration::Enum(_) => enums += 1,
            _ => {}
        });
        if enums > 0 {
            warn!(enums, "enum declarations are not listed, run EnumAsTypes first");
        }

        for (key, statement) in lists {
            if ts.contains_key(&key) {
                warn!(name = %key, "enum list not generated, a declaration with that name exists");
                continue;
            }
            ts.set_node(key, Declaration::Variable(statement))?;
        }
        Ok(())
    }
}

fn value_list(alias: &Alias) -> Option<(String, VariableStatement)> {
    let Expression::Union(arms) = &alias.ty else {
        return None;
    };
    let first = match arms.first()? {
        Expression::Literal(value) => value,
        _ => return None,
    };
    let same_kind = arms
        .iter()
        .all(|arm| matches!(arm, Expression::Literal(v) if v.same_kind(first)));
    if !same_kind {
        return None;
    }

    let name = Identifier {
        name: pluralize(&alias.name.name),
        ..alias.name.clone()
    };
    let element = Expression::Reference(Reference {
        name: alias.name.clone(),
        args: Vec::new(),
    });
    let key = name.reference();
    let mut statement = VariableStatement::constant(
        name,
        Some(Expression::array(element)),
        Expression::ArrayLiteral(arms.clone()),
    );
    if alias.modifiers.contains(&Modifier::Export) {
        statement.modifiers.push(Modifier::Export);
    }
    statement.source = alias.source.clone();
    Some((key, statement))
}

fn pluralize(name: &str) -> String {
    let sibilant = name.ends_with(['x', 's', 'z']) || name.ends_with("ch") || name.ends_with("sh");
    if sibilant {
        format!("{name}es")
    } else {
        format!("{name}s")
    }
}
