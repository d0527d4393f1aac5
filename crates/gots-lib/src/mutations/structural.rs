use gots_core::bindings::{Alias, Declaration, Expression};

use super::Mutation;
use crate::Result;
use crate::store::Typescript;

/// Rewrites every interface as a type alias of an object literal.
///
/// Heritage becomes an intersection: `interface A extends B { x: T }` turns
/// into `type A = B & { x: T }`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterfaceToType;

impl Mutation for InterfaceToType {
    fn name(&self) -> &str {
        "InterfaceToType"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| {
            let Declaration::Record(record) = node else {
                return;
            };
            let literal = Expression::TypeLiteral(std::mem::take(&mut record.fields));
            let mut parents: Vec<Expression> = record
                .heritage
                .drain(..)
                .flat_map(|clause| clause.args)
                .collect();
            let ty = if parents.is_empty() {
                literal
            } else {
                parents.push(literal);
                Expression::Intersection(parents)
            };
            *node = Declaration::Alias(Alias {
                name: record.name.clone(),
                modifiers: std::mem::take(&mut record.modifiers),
                type_params: std::mem::take(&mut record.type_params),
                ty,
                source: record.source.take(),
                comments: std::mem::take(&mut record.comments),
            });
        });
        Ok(())
    }
}
