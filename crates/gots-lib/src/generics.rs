//! Type parameter list cleanup.
//!
//! Parameters are collected bottom-up from every field that mentions them,
//! so the raw list repeats names.

use indexmap::IndexMap;

use gots_core::bindings::{Expression, TypeParameter};

use crate::{Error, Result};

/// Deduplicate by name in first-seen order.
///
/// Repeated names must carry identical constraints. Union constraints lose
/// repeated literal and keyword arms. Simplifying twice is a no-op.
pub fn simplify(params: Vec<TypeParameter>) -> Result<Vec<TypeParameter>> {
    let mut seen: IndexMap<String, TypeParameter> = IndexMap::with_capacity(params.len());
    for mut param in params {
        if let Some(Expression::Union(arms)) = &mut param.constraint {
            dedup_arms(arms);
        }

        let key = param.name.reference();
        match seen.get(&key) {
            Some(existing) if existing.constraint != param.constraint => {
                return Err(Error::TypeParameterCollision(key));
            }
            Some(_) => {}
            None => {
                seen.insert(key, param);
            }
        }
    }
    Ok(seen.into_values().collect())
}

fn dedup_arms(arms: &mut Vec<Expression>) {
    let mut kept: Vec<Expression> = Vec::with_capacity(arms.len());
    for arm in arms.drain(..) {
        let repeated = matches!(arm, Expression::Literal(_) | Expression::Keyword(_))
            && kept.contains(&arm);
        if !repeated {
            kept.push(arm);
        }
    }
    *arms = kept;
}
