//! Core data structures for gots.
//!
//! - [`bindings`]: the TypeScript declaration graph produced by conversion.
//! - [`source`]: the Go packages consumed by conversion.
//! - [`tags`]: Go struct tag parsing.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bindings;
pub mod source;
pub mod tags;
