// lib/crates/paragon-common/src/agent.rs

use serde::{Deserialize, Serialize};

/// Agent configuration as received on the wire.
///
/// Every field is optional so that a missing field can be reported by name
/// instead of surfacing as an opaque deserialization error. Convert into an
/// [`AgentConfig`] through the server's validation step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAgentConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Template the request was built from, informational only.
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// System prompt handed to the agent container.
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub resources: Option<RawResources>,
    #[serde(default)]
    pub scaling: Option<RawScaling>,
    #[serde(default)]
    pub cloud: Option<CloudProvider>,
    /// Log level passed through as `LOG_LEVEL`.
    #[serde(default)]
    pub logging: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// Resource requests as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResources {
    #[serde(default)]
    pub cpu: Option<String>,
    #[serde(default)]
    pub memory: Option<String>,
}

/// Scaling settings as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScaling {
    #[serde(default)]
    pub replicas: Option<u32>,
}

/// A validated agent configuration. All mandatory fields are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub model: String,
    pub instruction: String,
    pub resources: Resources,
    pub replicas: u32,
    #[serde(default)]
    pub cloud: CloudProvider,
    #[serde(default = "default_log_level")]
    pub logging: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// CPU and memory requests in Kubernetes quantity notation (`100m`, `128Mi`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub cpu: String,
    pub memory: String,
}

/// Log level used when the request does not name one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Target cloud of a deployment. Only DigitalOcean gets an external
/// load balancer; every other value keeps the service cluster-internal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CloudProvider {
    #[default]
    None,
    DigitalOcean,
    Other(String),
}

impl CloudProvider {
    /// Whether services for this cloud are exposed through a load balancer.
    #[must_use]
    pub fn is_load_balanced(&self) -> bool {
        matches!(self, Self::DigitalOcean)
    }
}

impl From<String> for CloudProvider {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Self::None,
            "digitalocean" => Self::DigitalOcean,
            _ => Self::Other(value),
        }
    }
}

impl From<CloudProvider> for String {
    fn from(value: CloudProvider) -> Self {
        match value {
            CloudProvider::None => "none".to_string(),
            CloudProvider::DigitalOcean => "digitalocean".to_string(),
            CloudProvider::Other(raw) => raw,
        }
    }
}
