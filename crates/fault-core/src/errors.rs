//! Error types for Faultline.
//!
//! Two families live here. The marker errors (`Error0`..`Error3`) are the
//! payload-free faults the emitter signals, and [`Fault`] is their sum type.
//! [`CoreError`] covers ordinary failures of the surrounding tooling, such as
//! parsing an unknown kind name.

use thiserror::Error;

use crate::kinds::ErrorKind;

/// A payload-free error type bound to exactly one [`ErrorKind`].
pub trait Marker: std::error::Error + Copy + Into<Fault> {
    const KIND: ErrorKind;
}

macro_rules! marker_error {
    ($(#[$meta:meta])* $name:ident => $kind:ident, $message:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
        #[error($message)]
        pub struct $name;

        impl Marker for $name {
            const KIND: ErrorKind = ErrorKind::$kind;
        }
    };
}

marker_error!(
    /// Signaled by `op0`.
    Error0 => Error0, "error0 signaled"
);
marker_error!(
    /// Signaled by `op1`.
    Error1 => Error1, "error1 signaled"
);
marker_error!(
    /// Signaled by `op2`.
    Error2 => Error2, "error2 signaled"
);
marker_error!(
    /// Signaled by `op3`.
    Error3 => Error3, "error3 signaled"
);

/// Any fault the emitter can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Fault {
    #[error(transparent)]
    Error0(#[from] Error0),

    #[error(transparent)]
    Error1(#[from] Error1),

    #[error(transparent)]
    Error2(#[from] Error2),

    #[error(transparent)]
    Error3(#[from] Error3),
}

impl Fault {
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::Error0(_) => Error0::KIND,
            Self::Error1(_) => Error1::KIND,
            Self::Error2(_) => Error2::KIND,
            Self::Error3(_) => Error3::KIND,
        }
    }

    /// Build the fault for `kind`.
    #[must_use]
    pub const fn of(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Error0 => Self::Error0(Error0),
            ErrorKind::Error1 => Self::Error1(Error1),
            ErrorKind::Error2 => Self::Error2(Error2),
            ErrorKind::Error3 => Self::Error3(Error3),
        }
    }
}

/// Errors raised by Faultline tooling around the emitter.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A kind name or code did not match any [`ErrorKind`].
    #[error("Unknown error kind: {0}")]
    UnknownKind(String),

    /// An operation name did not match any emitter operation.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_messages_match_kind_messages() {
        assert_eq!(Error0.to_string(), ErrorKind::Error0.message());
        assert_eq!(Error1.to_string(), ErrorKind::Error1.message());
        assert_eq!(Error2.to_string(), ErrorKind::Error2.message());
        assert_eq!(Error3.to_string(), ErrorKind::Error3.message());
    }

    #[test]
    fn fault_of_recovers_its_kind() {
        for kind in ErrorKind::ALL {
            let fault = Fault::of(kind);
            assert_eq!(fault.kind(), kind);
            assert_eq!(fault.to_string(), kind.message());
        }
    }

    #[test]
    fn from_marker_keeps_kind() {
        assert_eq!(Fault::from(Error2).kind(), ErrorKind::Error2);
        assert_ne!(Fault::from(Error2), Fault::from(Error3));
    }
}
