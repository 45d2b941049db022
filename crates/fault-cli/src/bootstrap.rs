use anyhow::Context;

use fault_config::FaultConfig;

/// Load `.env` (if any), then the layered config.
pub fn load_config() -> anyhow::Result<FaultConfig> {
    let config =
        FaultConfig::load_with_dotenv().context("failed to load faultline configuration")?;
    tracing::debug!(
        repeat = config.probe.repeat,
        operations = config.probe.operations.len(),
        runtime_kinds = ?config.boundary.runtime_kinds,
        "configuration loaded"
    );
    Ok(config)
}
