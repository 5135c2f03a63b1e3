// lib/crates/paragon-common/src/result.rs

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome label of a deploy call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Success,
    Error,
}

/// Which stage of a deploy produced an error. Not serialized; the HTTP layer
/// uses it to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A required field was missing or malformed. No command was issued.
    Validation,
    /// `kubectl` exited nonzero.
    Cluster,
    /// Anything else: spawn failure, timeout, I/O, malformed output.
    Unexpected,
}

/// Address at which a deployed agent's service can be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceAddress {
    Url(String),
    /// The load balancer has not published an ingress yet.
    Pending,
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Pending => f.write_str("pending"),
        }
    }
}

impl Serialize for ServiceAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServiceAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "pending" {
            Self::Pending
        } else {
            Self::Url(raw)
        })
    }
}

/// Where the deployed agent lives once applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub namespace: String,
    pub endpoints: Vec<String>,
    pub url: ServiceAddress,
}

/// Uniform result of a deploy call. Errors never escape as raw failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentResult {
    pub status: DeploymentStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceInfo>,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl DeploymentResult {
    #[must_use]
    pub fn success(message: impl Into<String>, service: ServiceInfo) -> Self {
        Self {
            status: DeploymentStatus::Success,
            message: message.into(),
            service: Some(service),
            failure: None,
        }
    }

    #[must_use]
    pub fn error(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            status: DeploymentStatus::Error,
            message: message.into(),
            service: None,
            failure: Some(kind),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == DeploymentStatus::Success
    }
}
