//! # fault-schema
//!
//! JSON Schema generation and validation for the types that cross the
//! Faultline boundary.
//!
//! Types are defined in `fault-core` with `#[derive(JsonSchema)]`. This crate
//! collects their schemas into a [`SchemaRegistry`] for lookup, export
//! (`faultline schema`) and validation of incoming envelopes.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
