//! Schema registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("Unknown schema: {0}")]
    NotFound(String),

    /// The instance broke one or more schema rules.
    #[error("Instance failed schema validation: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// A registered schema could not be compiled into a validator.
    #[error("Schema could not be compiled: {0}")]
    Generation(String),
}
