//! Deploy command: one-shot deploy from the command line.

use anyhow::{Context, Result};
use paragon_common::ServerConfig;

use super::{AgentFileArgs, build_orchestrator};

/// Deploy the agent described by `args` and print the result as JSON.
///
/// # Errors
///
/// Returns an error if deployment is disabled, the files cannot be loaded,
/// or the deploy itself reports an error.
pub async fn run(args: &AgentFileArgs, config: &ServerConfig) -> Result<()> {
    anyhow::ensure!(
        config.deploy_enabled,
        "agent deployment is disabled (PARAGON_DEPLOY_ENABLED=false)"
    );
    let (raw, secrets) = args.load()?;
    let result = build_orchestrator(config).deploy(&raw, &secrets).await;
    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("serializing deployment result")?
    );
    anyhow::ensure!(result.is_success(), "{}", result.message);
    Ok(())
}
