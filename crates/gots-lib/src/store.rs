//! Keyed registries of declaration nodes.
//!
//! [`NodeStore`] is the mutable build-time store: entries may be
//! placeholders and may carry queued [`PendingOperation`]s. Finalizing it
//! drains every queue and yields a [`Typescript`] graph, which has no
//! placeholders and accepts no further queued operations.

use indexmap::IndexMap;

use gots_core::bindings::Declaration;

use crate::enums::{self, PendingOperation};
use crate::{Error, Result};

/// Node plus the operations still to be applied to it.
#[derive(Clone, Debug, Default)]
pub struct StoreEntry {
    pub node: Option<Declaration>,
    pending: Vec<PendingOperation>,
}

impl StoreEntry {
    pub fn queue(&mut self, op: PendingOperation) {
        self.pending.push(op);
    }

    pub fn pending(&self) -> &[PendingOperation] {
        &self.pending
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeStore {
    entries: IndexMap<String, StoreEntry>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node. Fails if the key exists, placeholder or not.
    pub fn set_node(&mut self, key: impl Into<String>, node: Declaration) -> Result<()> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(Error::DuplicateNode(key));
        }
        self.entries.insert(
            key,
            StoreEntry {
                node: Some(node),
                pending: Vec::new(),
            },
        );
        Ok(())
    }

    /// Create a node that queued operations may already be waiting for.
    ///
    /// Fails if the key already holds a node.
    pub fn fill_node(&mut self, key: impl Into<String>, node: Declaration) -> Result<()> {
        let key = key.into();
        let entry = self.entries.entry(key.clone()).or_default();
        if entry.node.is_some() {
            return Err(Error::DuplicateNode(key));
        }
        entry.node = Some(node);
        Ok(())
    }

    /// Apply `update` to the entry, creating an empty placeholder first if
    /// the key is absent.
    pub fn update_node<F>(&mut self, key: impl Into<String>, update: F)
    where
        F: FnOnce(&mut StoreEntry),
    {
        update(self.entries.entry(key.into()).or_default());
    }

    /// Overwrite the node. Queued operations are kept.
    pub fn replace_node(&mut self, key: impl Into<String>, node: Declaration) {
        self.entries.entry(key.into()).or_default().node = Some(node);
    }

    pub fn get(&self, key: &str) -> Option<&Declaration> {
        self.entries.get(key).and_then(|e| e.node.as_ref())
    }

    pub fn entry(&self, key: &str) -> Option<&StoreEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visit every entry, placeholders included, in insertion order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, Option<&Declaration>),
    {
        for (key, entry) in &self.entries {
            f(key, entry.node.as_ref());
        }
    }

    /// Drain all queued operations in arrival order.
    ///
    /// A placeholder that never received a node is an error.
    pub fn finalize(self) -> Result<Typescript> {
        let mut nodes = IndexMap::with_capacity(self.entries.len());
        for (key, entry) in self.entries {
            match enums::apply_all(&key, entry.node, entry.pending)? {
                Some(node) => {
                    nodes.insert(key, node);
                }
                None => {
                    return Err(Error::EnumUpgrade {
                        key,
                        found: "no declaration",
                    });
                }
            }
        }
        Ok(Typescript::from_nodes(nodes))
    }
}

/// The finished declaration graph, ready for mutation passes and a single
/// serialization.
#[derive(Clone, Debug, Default)]
pub struct Typescript {
    nodes: IndexMap<String, Declaration>,
    pub(crate) serialized: bool,
}

impl Typescript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: IndexMap<String, Declaration>) -> Self {
        Self {
            nodes,
            serialized: false,
        }
    }

    pub fn set_node(&mut self, key: impl Into<String>, node: Declaration) -> Result<()> {
        let key = key.into();
        if self.nodes.contains_key(&key) {
            return Err(Error::DuplicateNode(key));
        }
        self.nodes.insert(key, node);
        Ok(())
    }

    pub fn replace_node(&mut self, key: impl Into<String>, node: Declaration) {
        self.nodes.insert(key.into(), node);
    }

    pub fn remove_node(&mut self, key: &str) -> Option<Declaration> {
        self.nodes.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Declaration> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Declaration> {
        self.nodes.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_serialized(&self) -> bool {
        self.serialized
    }

    /// Visit every node. Order is unspecified; sort keys when it matters.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &Declaration),
    {
        for (key, node) in &self.nodes {
            f(key, node);
        }
    }

    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut Declaration),
    {
        for (key, node) in &mut self.nodes {
            f(key, node);
        }
    }

    pub(crate) fn nodes(&self) -> &IndexMap<String, Declaration> {
        &self.nodes
    }
}
