use gots_core::bindings::{Declaration, Expression, PropertySignature, walk_declaration_mut};

use super::Mutation;
use crate::Result;
use crate::builtins::RECORD;
use crate::store::Typescript;

/// Drops the `null` arm from optional fields: an omitted field already reads
/// as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimplifyOptional;

impl Mutation for SimplifyOptional {
    fn name(&self) -> &str {
        "SimplifyOptional"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| {
            if let Declaration::Record(record) = node {
                record.fields.iter_mut().for_each(simplify_property);
            }
            walk_declaration_mut(node, &mut |expr| {
                if let Expression::TypeLiteral(members) = expr {
                    members.iter_mut().for_each(simplify_property);
                }
            });
        });
        Ok(())
    }
}

fn simplify_property(prop: &mut PropertySignature) {
    if !prop.optional {
        return;
    }
    let Expression::Union(arms) = &mut prop.ty else {
        return;
    };
    if !arms.iter().any(Expression::is_null) {
        return;
    }
    arms.retain(|arm| !arm.is_null());
    if arms.len() == 1 {
        prop.ty = arms.remove(0);
    }
}

/// `Record<K, V> | null` becomes `Record<K, V>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotNullMaps;

impl Mutation for NotNullMaps {
    fn name(&self) -> &str {
        "NotNullMaps"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| {
            walk_declaration_mut(node, &mut |expr| {
                if let Some(map) = non_null_arm(expr, is_record) {
                    *expr = map;
                }
            });
        });
        Ok(())
    }
}

/// `(T | null)[]` becomes `T[]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullUnionSlices;

impl Mutation for NullUnionSlices {
    fn name(&self) -> &str {
        "NullUnionSlices"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| {
            walk_declaration_mut(node, &mut |expr| {
                let Expression::Array(elem) = expr else {
                    return;
                };
                if let Some(inner) = non_null_arm(elem, |_| true) {
                    **elem = inner;
                }
            });
        });
        Ok(())
    }
}

fn is_record(expr: &Expression) -> bool {
    expr.reference_name()
        .is_some_and(|name| name.package.is_none() && name.name == RECORD)
}

/// The other arm of a two-arm union with `null`, if it satisfies `accept`.
fn non_null_arm(expr: &Expression, accept: impl Fn(&Expression) -> bool) -> Option<Expression> {
    let Expression::Union(arms) = expr else {
        return None;
    };
    match arms.as_slice() {
        [Expression::Null, other] | [other, Expression::Null] if !other.is_null() && accept(other) => {
            Some(other.clone())
        }
        _ => None,
    }
}

