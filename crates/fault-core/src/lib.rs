//! # fault-core
//!
//! Error kinds, the fault emitter, and the boundary envelope for Faultline.
//!
//! This crate provides the foundational types shared across all Faultline crates:
//! - The closed [`ErrorKind`] taxonomy and the [`Operation`] set with its static mapping
//! - Payload-free marker errors (`Error0`..`Error3`) and the [`Fault`] sum type
//! - [`FaultEmitter`], whose operations always fail with their predetermined kind
//! - [`Boundary`], which turns a fault into a caller-observable [`Signal`] and back
//! - [`Probe`], a caller-side harness that checks determinism and distinctness
//! - CLI response types

pub mod boundary;
pub mod emitter;
pub mod errors;
pub mod kinds;
pub mod probe;
pub mod responses;

pub use boundary::{Boundary, BoundaryError, Signal, SurfaceStyle};
pub use emitter::FaultEmitter;
pub use errors::{CoreError, Error0, Error1, Error2, Error3, Fault, Marker};
pub use kinds::{ErrorKind, Operation};
pub use probe::{MAX_REPEAT, Observation, Probe, ProbeReport, Violation};
