use fault_config::FaultConfig;
use fault_core::{FaultEmitter, Operation};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EmitArgs;
use crate::output::output;

/// Handle `faultline emit`.
pub fn handle(args: &EmitArgs, config: &FaultConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let boundary = config.boundary.boundary();
    let operation = Operation::for_kind(args.kind);
    let signal = boundary.cross(operation, FaultEmitter::new().emit(args.kind));
    boundary.verify(&signal)?;
    output(&signal, flags.format)
}
