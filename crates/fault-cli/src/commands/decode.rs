use std::io::Read;

use anyhow::Context;
use fault_config::FaultConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeArgs;
use crate::output::output;

/// Handle `faultline decode`.
pub fn handle(args: &DecodeArgs, config: &FaultConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = if args.payload == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read envelope from stdin")?;
        buffer
    } else {
        args.payload.clone()
    };

    let signal = config
        .boundary
        .boundary()
        .decode(payload.trim())
        .context("envelope rejected")?;
    output(&signal, flags.format)
}
