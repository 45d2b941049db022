use fault_config::FaultConfig;
use fault_core::responses::OperationEntry;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `faultline list`.
pub fn handle(config: &FaultConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = OperationEntry::table(&config.boundary.boundary());
    output(&rows, flags.format)
}
