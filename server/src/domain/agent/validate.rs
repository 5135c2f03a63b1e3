//! Pure configuration validation: no I/O, no async.
//!
//! Turns a wire-level [`RawAgentConfig`] into a validated [`AgentConfig`],
//! reporting the first missing field by name.

use paragon_common::agent::DEFAULT_LOG_LEVEL;
use paragon_common::{AgentConfig, RawAgentConfig, Resources};
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::error::AgentError;

/// Longest name for which `<name>-deployment`, the longer derived object
/// name, still fits a 63-character DNS label.
pub const MAX_AGENT_NAME_LEN: usize = 52;

/// DNS-1035 label, capped at [`MAX_AGENT_NAME_LEN`]. Checked before the name
/// is interpolated into object names or file paths.
pub static AGENT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern and cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z]([a-z0-9-]{0,50}[a-z0-9])?$").expect("valid regex")
});

/// Returns `true` if `name` can be used to derive Kubernetes object names.
pub fn is_valid_agent_name(name: &str) -> bool {
    AGENT_NAME_RE.is_match(name)
}

fn required<'a>(value: Option<&'a String>, field: &'static str) -> Result<&'a str, AgentError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.as_str()),
        _ => Err(AgentError::MissingField(field)),
    }
}

/// Validate presence of every mandatory field, then the agent name.
///
/// Top-level fields are checked in the order `name`, `model`, `instruction`,
/// `resources`, `scaling`; nested fields after that. Blank strings count as
/// missing.
///
/// # Errors
///
/// Returns [`AgentError::MissingField`] naming the first absent field, or
/// [`AgentError::InvalidName`] when the name is not a usable DNS label.
pub fn validate_config(raw: &RawAgentConfig) -> Result<AgentConfig, AgentError> {
    let name = required(raw.name.as_ref(), "name")?;
    let model = required(raw.model.as_ref(), "model")?;
    let instruction = raw
        .instruction
        .as_deref()
        .ok_or(AgentError::MissingField("instruction"))?;
    let resources = raw
        .resources
        .as_ref()
        .ok_or(AgentError::MissingField("resources"))?;
    let scaling = raw
        .scaling
        .as_ref()
        .ok_or(AgentError::MissingField("scaling"))?;

    let cpu = required(resources.cpu.as_ref(), "resources.cpu")?;
    let memory = required(resources.memory.as_ref(), "resources.memory")?;
    let replicas = scaling
        .replicas
        .ok_or(AgentError::MissingField("scaling.replicas"))?;

    if !is_valid_agent_name(name) {
        return Err(AgentError::InvalidName(name.to_string()));
    }

    let logging = raw
        .logging
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    Ok(AgentConfig {
        name: name.to_string(),
        model: model.to_string(),
        instruction: instruction.to_string(),
        resources: Resources {
            cpu: cpu.to_string(),
            memory: memory.to_string(),
        },
        replicas,
        cloud: raw.cloud.clone().unwrap_or_default(),
        logging: logging.to_string(),
        endpoints: raw.endpoints.clone(),
    })
}
