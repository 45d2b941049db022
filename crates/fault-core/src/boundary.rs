//! Boundary crossing for signaled faults.
//!
//! A fault leaves the emitter as a Rust value and reaches the caller as a
//! JSON [`Signal`] envelope. The envelope keeps the kind's name and code, so
//! the caller can tell kinds apart even when a kind surfaces under the generic
//! `RuntimeError` class. Decoding checks the envelope against the static
//! operation mapping and rejects anything that does not agree.

use std::convert::Infallible;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emitter::FaultEmitter;
use crate::errors::Fault;
use crate::kinds::{ErrorKind, Operation};

/// Class name used for kinds surfaced as a generic runtime failure.
pub const RUNTIME_CLASS: &str = "RuntimeError";

/// How a kind appears to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceStyle {
    /// Under its own class name (`Error2`).
    #[default]
    Typed,
    /// Under [`RUNTIME_CLASS`], with the kind kept in `kind` and `code`.
    Runtime,
}

/// Caller-observable envelope for one signaled fault.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Signal {
    pub operation: Operation,
    pub kind: ErrorKind,
    pub code: u8,
    pub class: String,
    pub message: String,
}

impl Signal {
    #[must_use]
    pub fn new(operation: Operation, kind: ErrorKind, style: SurfaceStyle) -> Self {
        let class = match style {
            SurfaceStyle::Typed => kind.class_name(),
            SurfaceStyle::Runtime => RUNTIME_CLASS,
        };
        Self {
            operation,
            kind,
            code: kind.code(),
            class: class.to_string(),
            message: kind.message().to_string(),
        }
    }

    /// The pair that must be unique per kind.
    #[must_use]
    pub const fn discriminant(&self) -> (u8, ErrorKind) {
        (self.code, self.kind)
    }

    /// Every attribute of the signal as ordered `(name, value)` pairs.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("operation", self.operation.to_string()),
            ("kind", self.kind.to_string()),
            ("code", self.code.to_string()),
            ("class", self.class.clone()),
            ("message", self.message.clone()),
        ]
    }
}

/// Errors raised while moving a signal across the boundary.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Failed to encode signal: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode signal: {0}")]
    Decode(#[source] serde_json::Error),

    /// The envelope's code does not belong to its kind.
    #[error("Signal code {code} does not match kind {kind}")]
    CodeMismatch { kind: ErrorKind, code: u8 },

    /// The envelope claims a kind its operation never signals.
    #[error("Operation {operation} signals {expected}, but the envelope carries {observed}")]
    KindMismatch {
        operation: Operation,
        expected: ErrorKind,
        observed: ErrorKind,
    },

    /// The envelope's class disagrees with the boundary's surface style.
    #[error("Signal class '{observed}' does not match expected '{expected}' for {kind}")]
    ClassMismatch {
        kind: ErrorKind,
        expected: String,
        observed: String,
    },

    #[error("Signal message '{observed}' does not belong to {kind}")]
    MessageMismatch { kind: ErrorKind, observed: String },
}

/// Per-kind surface styles plus the encode/decode rules for [`Signal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boundary {
    styles: [SurfaceStyle; ErrorKind::ALL.len()],
}

impl Boundary {
    /// Every kind surfaces under its own class.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            styles: [SurfaceStyle::Typed; ErrorKind::ALL.len()],
        }
    }

    /// Surface the listed kinds as [`RUNTIME_CLASS`], the rest typed.
    #[must_use]
    pub fn with_runtime_kinds(kinds: &[ErrorKind]) -> Self {
        let mut boundary = Self::new();
        for kind in kinds {
            boundary.styles[usize::from(kind.code())] = SurfaceStyle::Runtime;
        }
        boundary
    }

    #[must_use]
    pub const fn style_for(&self, kind: ErrorKind) -> SurfaceStyle {
        self.styles[kind.code() as usize]
    }

    /// Kinds this boundary surfaces as [`RUNTIME_CLASS`].
    #[must_use]
    pub fn runtime_kinds(&self) -> Vec<ErrorKind> {
        ErrorKind::ALL
            .into_iter()
            .filter(|kind| self.style_for(*kind) == SurfaceStyle::Runtime)
            .collect()
    }

    /// Turn an operation's result into the signal its caller observes.
    ///
    /// The success type is uninhabited, so every result is a fault.
    pub fn cross<E: Into<Fault>>(
        &self,
        operation: Operation,
        result: Result<Infallible, E>,
    ) -> Signal {
        let Err(error) = result;
        let fault: Fault = error.into();
        let kind = fault.kind();
        Signal::new(operation, kind, self.style_for(kind))
    }

    /// # Errors
    ///
    /// Returns [`BoundaryError::Encode`] if serialization fails.
    pub fn encode(&self, signal: &Signal) -> Result<String, BoundaryError> {
        serde_json::to_string(signal).map_err(BoundaryError::Encode)
    }

    /// Parse an envelope and check it against the static mapping.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::Decode`] for malformed JSON, or a mismatch
    /// error if the envelope disagrees with itself or with this boundary.
    pub fn decode(&self, payload: &str) -> Result<Signal, BoundaryError> {
        let signal = self.parse(payload)?;
        Self::check_mapping(&signal)?;
        Ok(signal)
    }

    /// Parse an envelope and check only that it is well formed: code, class
    /// and message must agree with the carried kind. The operation mapping is
    /// left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::Decode`] for malformed JSON, or the first
    /// envelope mismatch found.
    pub fn parse(&self, payload: &str) -> Result<Signal, BoundaryError> {
        let signal: Signal = serde_json::from_str(payload).map_err(BoundaryError::Decode)?;
        self.check_envelope(&signal)?;
        Ok(signal)
    }

    /// Check that a signal is one this boundary could have produced.
    ///
    /// # Errors
    ///
    /// Returns the first mismatch found: code, class, message, then kind.
    pub fn verify(&self, signal: &Signal) -> Result<(), BoundaryError> {
        self.check_envelope(signal)?;
        Self::check_mapping(signal)
    }

    fn check_envelope(&self, signal: &Signal) -> Result<(), BoundaryError> {
        if signal.code != signal.kind.code() {
            return Err(BoundaryError::CodeMismatch {
                kind: signal.kind,
                code: signal.code,
            });
        }

        let expected_class =
            Signal::new(signal.operation, signal.kind, self.style_for(signal.kind)).class;
        if signal.class != expected_class {
            return Err(BoundaryError::ClassMismatch {
                kind: signal.kind,
                expected: expected_class,
                observed: signal.class.clone(),
            });
        }

        if signal.message != signal.kind.message() {
            return Err(BoundaryError::MessageMismatch {
                kind: signal.kind,
                observed: signal.message.clone(),
            });
        }

        Ok(())
    }

    fn check_mapping(signal: &Signal) -> Result<(), BoundaryError> {
        let expected = signal.operation.signals();
        if signal.kind != expected {
            return Err(BoundaryError::KindMismatch {
                operation: signal.operation,
                expected,
                observed: signal.kind,
            });
        }
        Ok(())
    }

    /// Invoke `operation` on `emitter` and carry the fault through a full
    /// encode/decode round.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundaryError`] only if the crossing itself fails. The
    /// fault is the `Ok` value here: it is what the caller observed.
    pub fn invoke(
        &self,
        emitter: &FaultEmitter,
        operation: Operation,
    ) -> Result<Signal, BoundaryError> {
        let signal = self.cross(operation, emitter.invoke(operation));
        let payload = self.encode(&signal)?;
        self.decode(&payload)
    }
}
