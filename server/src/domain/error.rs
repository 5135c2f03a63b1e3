//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::api`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.

use paragon_common::FailureKind;
use thiserror::Error;

use crate::domain::agent::validate::MAX_AGENT_NAME_LEN;

// ── Agent errors ──────────────────────────────────────────────────────────────

/// Errors raised while validating an agent configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(
        "Invalid agent name '{0}': must start with a lowercase letter, contain only \
         lowercase letters, digits and hyphens, and be at most {MAX_AGENT_NAME_LEN} characters"
    )]
    InvalidName(String),
}

// ── Manifest errors ───────────────────────────────────────────────────────────

/// Errors raised while rendering manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to encode {what} for hashing")]
    Hash {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ── Deploy errors ─────────────────────────────────────────────────────────────

/// Failures of the deploy workflow. Each one is caught at the orchestrator
/// boundary and turned into an error `DeploymentResult`.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Invalid(#[from] AgentError),

    #[error("Deployment failed: {0}")]
    Manifest(#[from] ManifestError),

    /// `kubectl` ran and exited nonzero.
    #[error("Kubernetes error: {stderr}")]
    Cluster { command: String, stderr: String },

    #[error("Deployment failed: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl DeployError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Invalid(_) => FailureKind::Validation,
            Self::Cluster { .. } => FailureKind::Cluster,
            Self::Manifest(_) | Self::Unexpected(_) => FailureKind::Unexpected,
        }
    }
}

// ── Template errors ───────────────────────────────────────────────────────────

/// Errors raised by the template registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Agent with ID {0} not found")]
    NoMatch(String),

    #[error("Template '{0}' already exists")]
    AlreadyExists(String),
}
