use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Deployer server configuration, read from `PARAGON_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address (default: 0.0.0.0:8000)
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// Namespace every agent is deployed into.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Name or path of the cluster CLI.
    #[serde(default = "default_kubectl")]
    pub kubectl: String,

    /// Directory the rendered manifests are written to before `kubectl apply`.
    /// Files are left in place after the call.
    #[serde(default = "default_manifest_dir")]
    pub manifest_dir: PathBuf,

    /// Container image every agent runs.
    #[serde(default = "default_agent_image")]
    pub agent_image: String,

    #[serde(default = "default_container_port")]
    pub container_port: u16,

    #[serde(default = "default_service_port")]
    pub service_port: u16,

    /// Upper bound on a single `kubectl` invocation, in seconds.
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,

    /// When false, the deploy endpoint answers 501.
    #[serde(default = "default_deploy_enabled")]
    pub deploy_enabled: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000))
}

fn default_namespace() -> String {
    "ai-agents".to_string()
}

fn default_kubectl() -> String {
    "kubectl".to_string()
}

fn default_manifest_dir() -> PathBuf {
    PathBuf::from("/tmp/agent-deployment")
}

fn default_agent_image() -> String {
    "your-ai-agent-image:latest".to_string()
}

fn default_container_port() -> u16 {
    8000
}

fn default_service_port() -> u16 {
    80
}

fn default_command_timeout_secs() -> u64 {
    120
}

fn default_deploy_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            namespace: default_namespace(),
            kubectl: default_kubectl(),
            manifest_dir: default_manifest_dir(),
            agent_image: default_agent_image(),
            container_port: default_container_port(),
            service_port: default_service_port(),
            command_timeout_secs: default_command_timeout_secs(),
            deploy_enabled: default_deploy_enabled(),
        }
    }
}
