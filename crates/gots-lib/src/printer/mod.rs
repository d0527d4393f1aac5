//! Rendering of finished declarations to text.
//!
//! The serializer is generic over [`Printer`]; [`TypeScriptPrinter`] is the
//! one shipped with the crate.

mod typescript;

#[cfg(test)]
mod typescript_tests;

pub use typescript::TypeScriptPrinter;

use gots_core::bindings::Declaration;

/// Renders one top-level declaration at a time.
pub trait Printer {
    /// Text placed once before the first declaration.
    fn header(&self) -> &str;

    /// Render a declaration, without a trailing blank line.
    fn print(&self, decl: &Declaration) -> Result<String, PrintError>;
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PrintError {
    #[error("literal {0} has no TypeScript spelling")]
    NonFiniteFloat(f64),

    #[error("declaration has no name")]
    EmptyName,
}
