//! Probe run configuration.

use fault_core::Operation;
use serde::{Deserialize, Serialize};

/// Default number of rounds per probe run.
const fn default_repeat() -> u32 {
    2
}

fn default_operations() -> Vec<Operation> {
    Operation::ALL.to_vec()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Rounds to run; every listed operation is invoked once per round.
    #[serde(default = "default_repeat")]
    pub repeat: u32,

    /// Operations to probe, in invocation order.
    #[serde(default = "default_operations")]
    pub operations: Vec<Operation>,

    /// Spread invocations over the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            repeat: default_repeat(),
            operations: default_operations(),
            parallel: false,
        }
    }
}
