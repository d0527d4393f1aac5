use std::collections::HashSet;

use tracing::warn;

use gots_core::bindings::{
    Declaration, Expression, Keyword, SyntheticComment, TypeParameter, walk_expression_mut,
};

use super::Mutation;
use crate::Result;
use crate::builtins::TYPESCRIPT_GLOBALS;
use crate::store::Typescript;

/// Replaces references to undeclared names with `any`.
///
/// A reference is valid if it names a node in the graph, a TypeScript global,
/// or a type parameter of the enclosing declaration. The owning field, or the
/// declaration itself, gets a comment naming what was replaced. Run last.
#[derive(Clone, Copy, Debug, Default)]
pub struct MissingReferencesToAny;

impl Mutation for MissingReferencesToAny {
    fn name(&self) -> &str {
        "MissingReferencesToAny"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        let mut valid: HashSet<String> = ts.keys().map(str::to_string).collect();
        valid.extend(TYPESCRIPT_GLOBALS.iter().map(|s| s.to_string()));

        ts.for_each_mut(|key, node| {
            let locals = local_names(node.type_params());
            let scope = Scope {
                valid: &valid,
                locals: &locals,
            };
            let mut missing = Vec::new();

            match node {
                Declaration::Record(record) => {
                    for param in &mut record.type_params {
                        scope.repair_param(param, &mut missing);
                    }
                    for clause in &mut record.heritage {
                        clause.args.retain(|arg| {
                            let keep = scope.resolves(arg);
                            if !keep {
                                missing.push(display(arg));
                            }
                            keep
                        });
                    }
                    record.heritage.retain(|c| !c.args.is_empty());
                    for field in &mut record.fields {
                        let mut field_missing = Vec::new();
                        scope.repair(&mut field.ty, &mut field_missing);
                        if !field_missing.is_empty() {
                            field.comments.push(comment(&field_missing));
                            report(key, &field_missing);
                        }
                    }
                }
                Declaration::Alias(alias) => {
                    for param in &mut alias.type_params {
                        scope.repair_param(param, &mut missing);
                    }
                    scope.repair(&mut alias.ty, &mut missing);
                }
                Declaration::Enum(e) => {
                    for member in &mut e.members {
                        let mut member_missing = Vec::new();
                        if let Some(value) = &mut member.value {
                            scope.repair(value, &mut member_missing);
                        }
                        if !member_missing.is_empty() {
                            member.comments.push(comment(&member_missing));
                            report(key, &member_missing);
                        }
                    }
                }
                Declaration::Variable(stmt) => {
                    for decl in &mut stmt.declarations.declarations {
                        for expr in [decl.ty.as_mut(), decl.initializer.as_mut()]
                            .into_iter()
                            .flatten()
                        {
                            scope.repair(expr, &mut missing);
                        }
                    }
                }
            }

            if !missing.is_empty() {
                node.comments_mut().push(comment(&missing));
                report(key, &missing);
            }
        });
        Ok(())
    }
}

struct Scope<'a> {
    valid: &'a HashSet<String>,
    locals: &'a HashSet<String>,
}

impl Scope<'_> {
    fn is_known(&self, name: &str) -> bool {
        self.valid.contains(name) || self.locals.contains(name)
    }

    /// Whether a heritage argument names something that exists.
    fn resolves(&self, expr: &Expression) -> bool {
        match expr.reference_name() {
            Some(name) => self.is_known(&name.reference()),
            None => true,
        }
    }

    fn repair(&self, expr: &mut Expression, missing: &mut Vec<String>) {
        walk_expression_mut(expr, &mut |e| {
            let Some(name) = e.reference_name() else {
                return;
            };
            let name = name.reference();
            if !self.is_known(&name) {
                missing.push(name);
                *e = Expression::keyword(Keyword::Any);
            }
        });
    }

    fn repair_param(&self, param: &mut TypeParameter, missing: &mut Vec<String>) {
        for expr in [param.constraint.as_mut(), param.default.as_mut()]
            .into_iter()
            .flatten()
        {
            self.repair(expr, missing);
        }
    }
}

fn local_names(params: &[TypeParameter]) -> HashSet<String> {
    params.iter().map(|p| p.name.reference()).collect()
}

fn display(expr: &Expression) -> String {
    expr.reference_name()
        .map(|n| n.reference())
        .unwrap_or_default()
}

fn comment(missing: &[String]) -> SyntheticComment {
    SyntheticComment::leading(format!(
        " Reference to unknown type {} replaced with 'any'",
        missing.join(", ")
    ))
}

fn report(key: &str, missing: &[String]) {
    warn!(
        node = key,
        missing = %missing.join(", "),
        "unresolved reference replaced with any"
    );
}
