//! Central schema registry for all Faultline boundary types.
//!
//! The `SchemaRegistry` builds JSON Schemas from fault-core types at
//! construction time using [`schemars::schema_for!`] and validates with
//! `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Store of JSON Schemas keyed by snake-case type name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry holding every boundary, probe and response schema.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Taxonomy (2) ---
        register!(schemas, "error_kind", fault_core::ErrorKind);
        register!(schemas, "operation", fault_core::Operation);

        // --- Boundary envelope (1) ---
        register!(schemas, "signal", fault_core::Signal);

        // --- Probe (3) ---
        register!(schemas, "observation", fault_core::Observation);
        register!(schemas, "violation", fault_core::Violation);
        register!(schemas, "probe_report", fault_core::ProbeReport);

        // --- CLI responses (2) ---
        register!(
            schemas,
            "operation_entry",
            fault_core::responses::OperationEntry
        );
        register!(
            schemas,
            "inspect_response",
            fault_core::responses::InspectResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_core::{Boundary, ErrorKind, FaultEmitter, Operation, Probe};
    use pretty_assertions::assert_eq;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 2 taxonomy + 1 envelope + 3 probe + 2 responses = 8
        assert_eq!(registry().schema_count(), 8);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"signal"));
    }

    #[test]
    fn crossed_signal_validates() {
        let boundary = Boundary::with_runtime_kinds(&[ErrorKind::Error1]);
        let signal = boundary
            .invoke(&FaultEmitter::new(), Operation::Op1)
            .expect("crossing succeeds");
        let value = serde_json::to_value(&signal).unwrap();
        registry().validate("signal", &value).unwrap();
    }

    #[test]
    fn probe_report_validates() {
        let report = Probe::default().run(&Operation::ALL, 1);
        let value = serde_json::to_value(&report).unwrap();
        registry().validate("probe_report", &value).unwrap();
    }

    #[test]
    fn signal_missing_kind_fails_validation() {
        let value = serde_json::json!({
            "operation": "op0",
            "code": 0,
            "class": "Error0",
            "message": "error0 signaled"
        });
        let err = registry().validate("signal", &value).unwrap_err();
        assert!(matches!(err, SchemaError::ValidationFailed { .. }));
    }

    #[test]
    fn unknown_schema_name_is_not_found() {
        let err = registry()
            .validate("nonexistent", &serde_json::json!({}))
            .unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(ref name) if name == "nonexistent"));
    }
}
