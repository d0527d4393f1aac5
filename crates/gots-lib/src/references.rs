//! Lazy generation of referenced declarations.
//!
//! A generated declaration may reference a type from a package that was only
//! included by reference. Such types are recorded here and generated on
//! demand, transitively, until nothing new is referenced.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{Error, Result};

/// A Go object, identified by import path and name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    pub package: String,
    pub name: String,
}

impl ObjectRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct ReferenceState {
    generated: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ReferenceTracker {
    packages: IndexMap<String, IndexMap<String, ReferenceState>>,
}

/// Objects handed out by earlier calls to [`ReferenceTracker::remaining`].
///
/// One `Sweep` spans a whole resolution loop; it is what detects an object
/// that stays ungenerated after it was handed out.
#[derive(Debug, Default)]
pub struct Sweep {
    tried: HashSet<ObjectRef>,
}

impl ReferenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_referenced(&mut self, obj: &ObjectRef) {
        self.packages
            .entry(obj.package.clone())
            .or_default()
            .entry(obj.name.clone())
            .or_default();
    }

    pub fn mark_generated(&mut self, obj: &ObjectRef) {
        self.packages
            .entry(obj.package.clone())
            .or_default()
            .entry(obj.name.clone())
            .or_default()
            .generated = true;
    }

    pub fn is_referenced(&self, obj: &ObjectRef) -> bool {
        self.state(obj).is_some()
    }

    pub fn is_generated(&self, obj: &ObjectRef) -> bool {
        self.state(obj).is_some_and(|s| s.generated)
    }

    /// Referenced objects not yet generated.
    ///
    /// The caller generates them, marks them generated, and calls again until
    /// the result is empty. An object returned by an earlier call of the same
    /// sweep that is still not generated means the loop cannot make progress.
    pub fn remaining(&self, sweep: &mut Sweep) -> Result<Vec<ObjectRef>> {
        let mut pending = Vec::new();
        for (package, names) in &self.packages {
            for (name, state) in names {
                if state.generated {
                    continue;
                }
                let obj = ObjectRef::new(package.as_str(), name.as_str());
                if !sweep.tried.insert(obj.clone()) {
                    return Err(Error::CircularGeneration {
                        package: obj.package,
                        name: obj.name,
                    });
                }
                pending.push(obj);
            }
        }
        Ok(pending)
    }

    fn state(&self, obj: &ObjectRef) -> Option<&ReferenceState> {
        self.packages.get(&obj.package)?.get(&obj.name)
    }
}
