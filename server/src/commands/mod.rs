//! Command implementations

pub mod deploy;
pub mod render;
pub mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use paragon_common::{RawAgentConfig, SecretSet, ServerConfig};
use serde::de::DeserializeOwned;

use crate::application::services::DeploymentOrchestrator;
use crate::domain::agent::DeploymentTarget;
use crate::infra::{FsManifestStore, TokioCommandRunner};

/// Input files shared by `render` and `deploy`.
#[derive(Args)]
pub struct AgentFileArgs {
    /// Agent configuration file (YAML or JSON)
    #[arg(long, short)]
    pub config: PathBuf,

    /// Secrets file: a flat map of variable name to value (YAML or JSON)
    #[arg(long, short)]
    pub secrets: Option<PathBuf>,
}

impl AgentFileArgs {
    /// Read the agent config and the optional secrets file.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed.
    pub fn load(&self) -> Result<(RawAgentConfig, SecretSet)> {
        let config = read_document(&self.config)?;
        let secrets = match &self.secrets {
            Some(path) => read_document(path)?,
            None => SecretSet::new(),
        };
        Ok((config, secrets))
    }
}

/// Parse a YAML or JSON document. JSON is accepted as a YAML subset.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not match `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Wire the production adapters into an orchestrator.
#[must_use]
pub fn build_orchestrator(config: &ServerConfig) -> DeploymentOrchestrator {
    DeploymentOrchestrator::new(
        Arc::new(TokioCommandRunner::new(config.command_timeout())),
        Arc::new(FsManifestStore::new(config.manifest_dir.clone())),
        config.kubectl.clone(),
        DeploymentTarget::from(config),
    )
}
