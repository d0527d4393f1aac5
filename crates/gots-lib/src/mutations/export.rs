use gots_core::bindings::Modifier;

use super::Mutation;
use crate::Result;
use crate::store::Typescript;

/// Adds `export` to every top-level declaration. Running it twice is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportTypes;

impl Mutation for ExportTypes {
    fn name(&self) -> &str {
        "ExportTypes"
    }

    fn apply(&self, ts: &mut Typescript) -> Result<()> {
        ts.for_each_mut(|_, node| {
            let modifiers = node.modifiers_mut();
            if !modifiers.contains(&Modifier::Export) {
                modifiers.insert(0, Modifier::Export);
            }
        });
        Ok(())
    }
}
