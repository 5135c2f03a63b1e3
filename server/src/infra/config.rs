//! Server configuration loading from `PARAGON_*` environment variables.

use anyhow::{Context, Result};
use paragon_common::ServerConfig;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "PARAGON_";

/// Load [`ServerConfig`] from the process environment.
///
/// Each field maps to `PARAGON_<FIELD>`:
///   - `PARAGON_LISTEN_ADDR`          (default `0.0.0.0:8000`)
///   - `PARAGON_NAMESPACE`            (default `ai-agents`)
///   - `PARAGON_KUBECTL`              (default `kubectl`)
///   - `PARAGON_MANIFEST_DIR`         (default `/tmp/agent-deployment`)
///   - `PARAGON_AGENT_IMAGE`          (default `your-ai-agent-image:latest`)
///   - `PARAGON_CONTAINER_PORT`       (default `8000`)
///   - `PARAGON_SERVICE_PORT`         (default `80`)
///   - `PARAGON_COMMAND_TIMEOUT_SECS` (default `120`)
///   - `PARAGON_DEPLOY_ENABLED`       (default `true`)
///
/// # Errors
///
/// Returns an error if a variable is set but cannot be parsed.
pub fn load_from_env() -> Result<ServerConfig> {
    envy::prefixed(ENV_PREFIX)
        .from_env()
        .context("failed to load config from PARAGON_* env vars")
}

/// Load [`ServerConfig`] from explicit `(KEY, value)` pairs.
///
/// # Errors
///
/// Returns an error if a value cannot be parsed.
pub fn load_from_iter<I>(vars: I) -> Result<ServerConfig>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed(ENV_PREFIX)
        .from_iter(vars)
        .context("failed to parse PARAGON_* config")
}
