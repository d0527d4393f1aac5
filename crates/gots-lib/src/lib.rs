//! gots: Go type declarations to TypeScript declarations.
//!
//! # Example
//!
//! ```
//! use gots_core::source::{BasicKind, Object, Package, SourceType, TypeDecl};
//! use gots_lib::GoParser;
//! use gots_lib::mutations::{ExportTypes, Mutation};
//!
//! let mut pkg = Package::new("github.com/acme/sdk", "sdk");
//! pkg.objects.push(Object::TypeName(TypeDecl {
//!     name: "ID".to_string(),
//!     type_params: Vec::new(),
//!     underlying: SourceType::basic(BasicKind::String),
//!     doc: Vec::new(),
//!     position: None,
//! }));
//!
//! let mut parser = GoParser::new();
//! parser.include_generate(pkg).unwrap();
//!
//! let mut ts = parser.to_typescript().unwrap();
//! let passes: Vec<Box<dyn Mutation>> = vec![Box::new(ExportTypes)];
//! ts.apply_mutations(&passes).unwrap();
//! let output = ts.serialize().unwrap();
//! assert!(output.contains("export type ID = string;"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builtins;
pub mod convert;
pub mod enums;
pub mod generics;
pub mod mutations;
pub mod overrides;
pub mod printer;
pub mod references;
pub mod serialize;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use convert::GoParser;
pub use overrides::TypeOverride;
pub use store::{NodeStore, Typescript};

use gots_core::source::expr::ExprError;
use gots_core::tags::TagError;

use printer::PrintError;

/// Fatal conversion errors. Recoverable conditions are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported type {ty}: {reason}")]
    UnsupportedType { ty: String, reason: &'static str },

    #[error("invalid struct tag on field {field:?} of {owner:?}")]
    StructTag {
        owner: String,
        field: String,
        #[source]
        source: TagError,
    },

    #[error("node {0:?} already exists")]
    DuplicateNode(String),

    #[error("type parameter {0:?} is declared with conflicting constraints")]
    TypeParameterCollision(String),

    #[error("circular generation detected for {package}.{name}, infinite loop will not end")]
    CircularGeneration { package: String, name: String },

    #[error("already serialized, create a new graph to serialize again")]
    AlreadySerialized,

    #[error("node {key:?}: expected alias or enum for enum member, found {found}")]
    EnumUpgrade { key: String, found: &'static str },

    #[error("failed to parse type expression {expr:?}")]
    TypeExpression {
        expr: String,
        #[source]
        source: ExprError,
    },

    #[error("package {0} already exists")]
    DuplicatePackage(String),

    #[error("serialization order names unknown node {0:?}")]
    UnknownNode(String),

    #[error("render node {key:?}")]
    Render {
        key: String,
        #[source]
        source: PrintError,
    },

    #[error("parse object {name:?} in {package:?}")]
    Object {
        package: String,
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("mutation {pass}")]
    Mutation {
        pass: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn unsupported(ty: impl Into<String>, reason: &'static str) -> Self {
        Error::UnsupportedType {
            ty: ty.into(),
            reason,
        }
    }

    /// Innermost error in a chain of `Object`/`Mutation` wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Object { source, .. } | Error::Mutation { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
