//! Ordered, one-shot rendering of a finished graph.

use tracing::debug;

use crate::printer::{Printer, TypeScriptPrinter};
use crate::store::Typescript;
use crate::{Error, Result};

/// Generated-file banner.
pub const HEADER: &str = "// Code generated by 'gots'. DO NOT EDIT.\n\n";

impl Typescript {
    /// Render every node in lexicographic key order.
    pub fn serialize(&mut self) -> Result<String> {
        self.serialize_with(&TypeScriptPrinter::default(), sorted)
    }

    /// Render with a custom order. `order` receives the keys sorted and
    /// returns the keys to emit; every returned key must exist.
    pub fn serialize_in_order<F>(&mut self, order: F) -> Result<String>
    where
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        self.serialize_with(&TypeScriptPrinter::default(), order)
    }

    /// A graph renders at most once, whether or not the first attempt
    /// succeeded.
    pub fn serialize_with<P, F>(&mut self, printer: &P, order: F) -> Result<String>
    where
        P: Printer + ?Sized,
        F: FnOnce(Vec<String>) -> Vec<String>,
    {
        if self.serialized {
            return Err(Error::AlreadySerialized);
        }
        self.serialized = true;

        let keys = order(sorted(self.nodes().keys().cloned().collect()));
        let mut out = String::from(printer.header());
        for key in keys {
            let node = self
                .nodes()
                .get(&key)
                .ok_or_else(|| Error::UnknownNode(key.clone()))?;
            let text = printer
                .print(node)
                .map_err(|source| Error::Render { key: key.clone(), source })?;
            out.push_str(&text);
            out.push_str("\n\n");
        }
        debug!(nodes = self.len(), bytes = out.len(), "serialized graph");
        Ok(out)
    }
}

fn sorted(mut keys: Vec<String>) -> Vec<String> {
    keys.sort();
    keys
}
