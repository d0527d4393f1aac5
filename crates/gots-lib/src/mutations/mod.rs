//! Whole-graph rewrite passes.
//!
//! Passes run strictly in the order given to [`Typescript::apply_mutations`].
//! Dependencies between passes are the caller's responsibility:
//!
//! - [`EnumAsTypes`] before [`EnumLists`], when enums are in use.
//! - [`MissingReferencesToAny`] last.
//!
//! Within one pass, node visitation order is unspecified.

mod enums;
mod export;
mod nullability;
mod readonly;
mod references;
mod structural;

#[cfg(test)]
mod mutations_tests;
#[cfg(test)]
mod nullability_tests;
#[cfg(test)]
mod references_tests;

pub use enums::{EnumAsTypes, EnumLists, TrimEnumPrefix};
pub use export::ExportTypes;
pub use nullability::{NotNullMaps, NullUnionSlices, SimplifyOptional};
pub use readonly::ReadOnly;
pub use references::MissingReferencesToAny;
pub use structural::InterfaceToType;

use tracing::debug;

use crate::store::Typescript;
use crate::{Error, Result};

/// A rewrite over the finished graph.
pub trait Mutation {
    fn name(&self) -> &str;

    fn apply(&self, ts: &mut Typescript) -> Result<()>;
}

/// Any `Fn(&mut Typescript) -> Result<()>` is a pass.
impl<F> Mutation for F
where
    F: Fn(&mut Typescript) -> Result<()>,
{
    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        self(ts)
    }
}

/// Names accepted by [`by_name`], in recommended order.
pub const ALL: &[&str] = &[
    "ExportTypes",
    "ReadOnly",
    "EnumAsTypes",
    "TrimEnumPrefix",
    "EnumLists",
    "SimplifyOptional",
    "NotNullMaps",
    "NullUnionSlices",
    "InterfaceToType",
    "MissingReferencesToAny",
];

/// Look up a built-in pass by name.
pub fn by_name(name: &str) -> Option<Box<dyn Mutation>> {
    let pass: Box<dyn Mutation> = match name {
        "ExportTypes" => Box::new(ExportTypes),
        "ReadOnly" => Box::new(ReadOnly),
        "EnumAsTypes" => Box::new(EnumAsTypes),
        "TrimEnumPrefix" => Box::new(TrimEnumPrefix),
        "EnumLists" => Box::new(EnumLists),
        "SimplifyOptional" => Box::new(SimplifyOptional),
        "NotNullMaps" => Box::new(NotNullMaps),
        "NullUnionSlices" => Box::new(NullUnionSlices),
        "InterfaceToType" => Box::new(InterfaceToType),
        "MissingReferencesToAny" => Box::new(MissingReferencesToAny),
        _ => return None,
    };
    Some(pass)
}

impl Typescript {
    /// Run `passes` in order. The first failing pass aborts the rest.
    pub fn apply_mutations(&mut self, passes: &[Box<dyn Mutation>]) -> Result<()> {
        for pass in passes {
            self.apply_mutation(pass.as_ref())?;
        }
        Ok(())
    }

    pub fn apply_mutation(&mut self, pass: &dyn Mutation) -> Result<()> {
        debug!(pass = pass.name(), nodes = self.len(), "applying mutation");
        pass.apply(self).map_err(|source| Error::Mutation {
            pass: pass.name().to_string(),
            source: Box::new(source),
        })
    }
}
