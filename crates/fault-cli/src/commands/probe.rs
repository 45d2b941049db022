use anyhow::bail;
use fault_config::FaultConfig;
use fault_core::{Boundary, MAX_REPEAT, Operation, Probe};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProbeArgs;
use crate::output::output;

/// Effective probe settings after CLI flags override config.
#[derive(Debug, PartialEq, Eq)]
struct ProbePlan {
    operations: Vec<Operation>,
    repeat: u32,
    parallel: bool,
    boundary: Boundary,
}

fn plan(args: &ProbeArgs, config: &FaultConfig) -> anyhow::Result<ProbePlan> {
    let repeat = args.repeat.unwrap_or(config.probe.repeat);
    if repeat == 0 {
        bail!("--repeat must be at least 1");
    }
    if repeat > MAX_REPEAT {
        bail!("--repeat must be at most {MAX_REPEAT}");
    }

    let operations = if args.operations.is_empty() {
        config.probe.operations.clone()
    } else {
        args.operations.clone()
    };

    let boundary = if args.runtime_kinds.is_empty() {
        config.boundary.boundary()
    } else {
        Boundary::with_runtime_kinds(&args.runtime_kinds)
    };

    Ok(ProbePlan {
        operations,
        repeat,
        parallel: args.parallel || config.probe.parallel,
        boundary,
    })
}

/// Handle `faultline probe`.
///
/// Prints the report either way; a failed probe also exits non-zero.
pub fn handle(args: &ProbeArgs, config: &FaultConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan = plan(args, config)?;
    let probe = Probe::new(plan.boundary);
    let report = if plan.parallel {
        probe.run_parallel(&plan.operations, plan.repeat)
    } else {
        probe.run(&plan.operations, plan.repeat)
    };

    output(&report, flags.format)?;

    if !report.passed {
        bail!("probe failed with {} violation(s)", report.violations.len());
    }
    Ok(())
}
