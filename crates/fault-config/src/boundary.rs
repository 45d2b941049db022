//! Boundary surface configuration.

use fault_core::{Boundary, ErrorKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoundaryConfig {
    /// Kinds that surface as `RuntimeError` instead of their own class.
    #[serde(default)]
    pub runtime_kinds: Vec<ErrorKind>,
}

impl BoundaryConfig {
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        Boundary::with_runtime_kinds(&self.runtime_kinds)
    }
}
