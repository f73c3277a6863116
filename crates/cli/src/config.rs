// Path: crates/cli/src/config.rs

use agentid_types::config::ChainConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Filter used when `RUST_LOG` is unset. Reports go to stdout, so logs stay quiet.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Builds the chain configuration: defaults, then the TOML file, then the
/// environment (read through `env`), then `--rpc`. The result is validated.
pub fn load_chain_config<F>(
    path: Option<&Path>,
    rpc_override: Option<&str>,
    env: F,
) -> Result<ChainConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<ChainConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ChainConfig::default(),
    };
    config.apply_env(env)?;
    if let Some(rpc) = rpc_override.filter(|r| !r.is_empty()) {
        config.rpc_url = rpc.to_string();
    }
    config.validate()?;

    tracing::debug!(
        target: "config",
        rpc_url = %config.rpc_url,
        chain_id = config.chain_id,
        schema_uid = %config.schema_uid,
        "chain configuration loaded"
    );
    Ok(config)
}
