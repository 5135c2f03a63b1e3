//! Render command: print the manifests a deploy would apply.

use anyhow::{Context, Result};
use paragon_common::ServerConfig;

use super::{AgentFileArgs, build_orchestrator};
use crate::domain::agent::{ServiceManifest, WorkloadManifest};

/// Validate the agent files and print both manifests as one YAML stream.
/// Nothing is written and no command is run.
///
/// # Errors
///
/// Returns an error if the files cannot be loaded or the config is invalid.
pub fn run(args: &AgentFileArgs, config: &ServerConfig) -> Result<()> {
    let (raw, secrets) = args.load()?;
    let (workload, service) = build_orchestrator(config).plan(&raw, &secrets)?;
    print!("{}", to_yaml_stream(&workload, &service)?);
    Ok(())
}

/// Join both manifests as a multi-document YAML stream.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_yaml_stream(workload: &WorkloadManifest, service: &ServiceManifest) -> Result<String> {
    let workload = serde_yaml::to_string(workload).context("serializing workload manifest")?;
    let service = serde_yaml::to_string(service).context("serializing service manifest")?;
    Ok(format!("{workload}---\n{service}"))
}
