//! CLI response types returned as JSON by `faultline` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::boundary::{Boundary, Signal, SurfaceStyle};
use crate::kinds::{ErrorKind, Operation};

/// One row of `faultline list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OperationEntry {
    pub operation: Operation,
    pub kind: ErrorKind,
    pub code: u8,
    pub class: String,
    pub style: SurfaceStyle,
}

impl OperationEntry {
    /// The full operation table as `boundary` would surface it.
    #[must_use]
    pub fn table(boundary: &Boundary) -> Vec<Self> {
        Operation::ALL
            .into_iter()
            .map(|operation| {
                let kind = operation.signals();
                let style = boundary.style_for(kind);
                Self {
                    operation,
                    kind,
                    code: kind.code(),
                    class: Signal::new(operation, kind, style).class,
                    style,
                }
            })
            .collect()
    }
}

/// Response from `faultline invoke --inspect`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InspectResponse {
    pub summary: String,
    pub attributes: Vec<Attribute>,
}

/// A single `name: value` attribute of an inspected signal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl From<&Signal> for InspectResponse {
    fn from(signal: &Signal) -> Self {
        Self {
            summary: format!("{}: {}", signal.class, signal.message),
            attributes: signal
                .attributes()
                .into_iter()
                .map(|(name, value)| Attribute {
                    name: name.to_string(),
                    value,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_operation() {
        let rows = OperationEntry::table(&Boundary::new());
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.class.starts_with("Error")));
    }

    #[test]
    fn table_reflects_runtime_styles() {
        let rows = OperationEntry::table(&Boundary::with_runtime_kinds(&[ErrorKind::Error3]));
        assert_eq!(rows[3].class, "RuntimeError");
        assert_eq!(rows[3].style, SurfaceStyle::Runtime);
        assert_eq!(rows[0].class, "Error0");
    }

    #[test]
    fn inspect_response_lists_attributes() {
        let signal = Signal::new(Operation::Op2, ErrorKind::Error2, SurfaceStyle::Runtime);
        let response = InspectResponse::from(&signal);
        assert_eq!(response.summary, "RuntimeError: error2 signaled");
        assert_eq!(response.attributes[1].name, "kind");
        assert_eq!(response.attributes[1].value, "error2");
    }
}
