use gots_core::bindings::{Declaration, Expression, Modifier, OperatorKeyword, PropertySignature};

use super::Mutation;
use crate::Result;
use crate::store::Typescript;

/// Marks record fields and type literal members `readonly`, and wraps
/// array-shaped field and alias types in `readonly`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadOnly;

impl Mutation for ReadOnly {
    fn name(&self) -> &str {
        "ReadOnly"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| match node {
            Declaration::Record(record) => record.fields.iter_mut().for_each(readonly_property),
            Declaration::Alias(alias) => readonly_expr(&mut alias.ty),
            Declaration::Enum(_) | Declaration::Variable(_) => {}
        });
        Ok(())
    }
}

fn readonly_property(prop: &mut PropertySignature) {
    if !prop.modifiers.contains(&Modifier::Readonly) {
        prop.modifiers.push(Modifier::Readonly);
    }
    readonly_expr(&mut prop.ty);
}

fn readonly_expr(expr: &mut Expression) {
    match expr {
        Expression::Operator {
            keyword: OperatorKeyword::Readonly,
            ..
        } => {}
        Expression::Array(_) | Expression::Tuple { .. } => {
            let inner = std::mem::replace(expr, Expression::Null);
            *expr = Expression::readonly(inner);
        }
        Expression::Union(arms) => arms.iter_mut().for_each(readonly_expr),
        Expression::TypeLiteral(members) => members.iter_mut().for_each(readonly_property),
        _ => {}
    }
}
