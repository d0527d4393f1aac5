//! Deferred enum assembly.
//!
//! Go gives no ordering between `type Color string` and its `const` values,
//! so constants are queued against the type's key and applied after every
//! declaration has been seen.

use gots_core::bindings::{Declaration, Enum, EnumMember};

use crate::{Error, Result};

/// Operation queued against a node before finalization.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingOperation {
    /// Add a constant as a member, turning an alias into an enum first.
    EnumUpgrade(EnumMember),
}

/// Apply one queued operation. `node` is `None` for a key that only ever
/// received operations.
pub fn apply(key: &str, node: Option<Declaration>, op: PendingOperation) -> Result<Declaration> {
    let PendingOperation::EnumUpgrade(member) = op;
    match node {
        Some(Declaration::Alias(alias)) => Ok(Declaration::Enum(Enum {
            name: alias.name,
            modifiers: alias.modifiers,
            members: vec![member],
            source: alias.source,
            comments: alias.comments,
        })),
        Some(Declaration::Enum(mut e)) => {
            e.members.push(member);
            Ok(Declaration::Enum(e))
        }
        Some(other) => Err(Error::EnumUpgrade {
            key: key.to_string(),
            found: other.kind(),
        }),
        None => Err(Error::EnumUpgrade {
            key: key.to_string(),
            found: "no declaration",
        }),
    }
}

/// Drain `ops` in arrival order.
pub fn apply_all(
    key: &str,
    mut node: Option<Declaration>,
    ops: Vec<PendingOperation>,
) -> Result<Option<Declaration>> {
    for op in ops {
        node = Some(apply(key, node, op)?);
    }
    Ok(node)
}
