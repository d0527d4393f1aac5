//! Post-order traversal over expressions.
//!
//! Children are visited before their parent, so a callback may replace the
//! node it is handed without the replacement being visited again.

use super::{Declaration, Expression};

pub fn walk_expression_mut<F>(expr: &mut Expression, f: &mut F)
where
    F: FnMut(&mut Expression),
{
    for child in expr.children_mut() {
        walk_expression_mut(child, f);
    }
    f(expr);
}

/// Visit every expression reachable from a declaration.
pub fn walk_declaration_mut<F>(decl: &mut Declaration, f: &mut F)
where
    F: FnMut(&mut Expression),
{
    match decl {
        Declaration::Alias(alias) => {
            for param in &mut alias.type_params {
                walk_type_parameter(param, f);
            }
            walk_expression_mut(&mut alias.ty, f);
        }
        Declaration::Record(record) => {
            for param in &mut record.type_params {
                walk_type_parameter(param, f);
            }
            for clause in &mut record.heritage {
                for arg in &mut clause.args {
                    walk_expression_mut(arg, f);
                }
            }
            for field in &mut record.fields {
                walk_expression_mut(&mut field.ty, f);
            }
        }
        Declaration::Enum(e) => {
            for value in e.members.iter_mut().filter_map(|m| m.value.as_mut()) {
                walk_expression_mut(value, f);
            }
        }
        Declaration::Variable(stmt) => {
            for decl in &mut stmt.declarations.declarations {
                if let Some(ty) = &mut decl.ty {
                    walk_expression_mut(ty, f);
                }
                if let Some(init) = &mut decl.initializer {
                    walk_expression_mut(init, f);
                }
            }
        }
    }
}

fn walk_type_parameter<F>(param: &mut super::TypeParameter, f: &mut F)
where
    F: FnMut(&mut Expression),
{
    if let Some(constraint) = &mut param.constraint {
        walk_expression_mut(constraint, f);
    }
    if let Some(default) = &mut param.default {
        walk_expression_mut(default, f);
    }
}
