use anyhow::Context;
use fault_config::FaultConfig;
use fault_core::FaultEmitter;
use fault_core::responses::InspectResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InvokeArgs;
use crate::output::output;

/// Handle `faultline invoke`.
///
/// The fault is the expected outcome, so it is printed as output and the
/// command succeeds. Only a failed crossing is an error.
pub fn handle(args: &InvokeArgs, config: &FaultConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let boundary = config.boundary.boundary();
    let signal = boundary
        .invoke(&FaultEmitter::new(), args.operation)
        .with_context(|| format!("failed to carry {} across the boundary", args.operation))?;

    tracing::info!(operation = %args.operation, kind = %signal.kind, "operation faulted");

    if args.inspect {
        output(&InspectResponse::from(&signal), flags.format)
    } else {
        output(&signal, flags.format)
    }
}
