//! Error kinds and emitter operations for Faultline.
//!
//! Both enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The operation-to-kind mapping is a `const` match, so it is static and total.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ErrorKind
// ---------------------------------------------------------------------------

/// Closed set of discriminable fault categories.
///
/// Each kind has a stable snake-case name (`error0`) and a stable numeric code
/// (`0`). Either one identifies the kind on the far side of a boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Error0,
    Error1,
    Error2,
    Error3,
}

impl ErrorKind {
    /// Every kind, ordered by code.
    pub const ALL: [Self; 4] = [Self::Error0, Self::Error1, Self::Error2, Self::Error3];

    /// Stable numeric discriminant.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Error0 => 0,
            Self::Error1 => 1,
            Self::Error2 => 2,
            Self::Error3 => 3,
        }
    }

    /// Inverse of [`ErrorKind::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Error0),
            1 => Some(Self::Error1),
            2 => Some(Self::Error2),
            3 => Some(Self::Error3),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error0 => "error0",
            Self::Error1 => "error1",
            Self::Error2 => "error2",
            Self::Error3 => "error3",
        }
    }

    /// Class name a caller sees when the kind surfaces as its own type.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Error0 => "Error0",
            Self::Error1 => "Error1",
            Self::Error2 => "Error2",
            Self::Error3 => "Error3",
        }
    }

    /// Human-readable message carried by every signal of this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Error0 => "error0 signaled",
            Self::Error1 => "error1 signaled",
            Self::Error2 => "error2 signaled",
            Self::Error3 => "error3 signaled",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = CoreError;

    /// Accepts the snake-case name (`error2`), the class name (`Error2`) or
    /// the bare code (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| CoreError::UnknownKind(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// Operations exposed by the [`FaultEmitter`](crate::FaultEmitter).
///
/// ```text
/// op0 → error0
/// op1 → error1
/// op2 → error2
/// op3 → error3
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Op0,
    Op1,
    Op2,
    Op3,
}

impl Operation {
    pub const ALL: [Self; 4] = [Self::Op0, Self::Op1, Self::Op2, Self::Op3];

    /// The one kind this operation always signals.
    #[must_use]
    pub const fn signals(self) -> ErrorKind {
        match self {
            Self::Op0 => ErrorKind::Error0,
            Self::Op1 => ErrorKind::Error1,
            Self::Op2 => ErrorKind::Error2,
            Self::Op3 => ErrorKind::Error3,
        }
    }

    /// The operation that signals `kind`. The mapping is a bijection.
    #[must_use]
    pub const fn for_kind(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Error0 => Self::Op0,
            ErrorKind::Error1 => Self::Op1,
            ErrorKind::Error2 => Self::Op2,
            ErrorKind::Error3 => Self::Op3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Op0 => "op0",
            Self::Op1 => "op1",
            Self::Op2 => "op2",
            Self::Op3 => "op3",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownOperation(s.to_string()))
    }
}
