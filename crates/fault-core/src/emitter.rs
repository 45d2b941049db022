//! The fault emitter.
//!
//! Every operation fails, and there is no success path. The success type of
//! each operation is [`Infallible`], so a caller cannot mistake a fault for a
//! normal return. Operations have no side effects: no logging and no state.

use std::convert::Infallible;

use crate::errors::{Error0, Error1, Error2, Error3, Fault};
use crate::kinds::{ErrorKind, Operation};

/// Stateless provider of kind-specific faults.
///
/// The precise operations (`op0`..`op3`) name their one error type in the
/// signature. [`FaultEmitter::invoke`] dispatches by [`Operation`] value and
/// widens the error to [`Fault`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultEmitter;

impl FaultEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Always returns [`Error0`].
    pub const fn op0(&self) -> Result<Infallible, Error0> {
        Err(Error0)
    }

    /// # Errors
    ///
    /// Always returns [`Error1`].
    pub const fn op1(&self) -> Result<Infallible, Error1> {
        Err(Error1)
    }

    /// # Errors
    ///
    /// Always returns [`Error2`].
    pub const fn op2(&self) -> Result<Infallible, Error2> {
        Err(Error2)
    }

    /// # Errors
    ///
    /// Always returns [`Error3`].
    pub const fn op3(&self) -> Result<Infallible, Error3> {
        Err(Error3)
    }

    /// Invoke `operation` and widen its error to [`Fault`].
    ///
    /// # Errors
    ///
    /// Always returns the fault for `operation.signals()`.
    pub fn invoke(&self, operation: Operation) -> Result<Infallible, Fault> {
        match operation {
            Operation::Op0 => self.op0().map_err(Fault::from),
            Operation::Op1 => self.op1().map_err(Fault::from),
            Operation::Op2 => self.op2().map_err(Fault::from),
            Operation::Op3 => self.op3().map_err(Fault::from),
        }
    }

    /// Signal `kind` through the operation that owns it.
    ///
    /// # Errors
    ///
    /// Always returns the fault for `kind`.
    pub fn emit(&self, kind: ErrorKind) -> Result<Infallible, Fault> {
        self.invoke(Operation::for_kind(kind))
    }
}
