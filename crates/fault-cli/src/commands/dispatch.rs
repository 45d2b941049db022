use fault_config::FaultConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &FaultConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List => commands::list::handle(config, flags),
        Commands::Invoke(args) => commands::invoke::handle(args, config, flags),
        Commands::Emit(args) => commands::emit::handle(args, config, flags),
        Commands::Probe(args) => commands::probe::handle(args, config, flags),
        Commands::Decode(args) => commands::decode::handle(args, config, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
