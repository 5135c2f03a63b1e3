//! Kubernetes manifest generation: pure functions, no I/O, no async.
//!
//! Each builder takes a validated [`AgentConfig`] and returns a typed
//! manifest. Serialization and writing to disk are the caller's job.

use std::collections::BTreeMap;

use paragon_common::{AgentConfig, SecretSet, ServerConfig};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::domain::error::ManifestError;

/// Pod-template annotation carrying the hash of the agent configuration.
pub const CONFIG_HASH_ANNOTATION: &str = "config-hash";
/// Pod-template annotation carrying the hash of the injected secrets.
pub const SECRETS_HASH_ANNOTATION: &str = "secrets-hash";

/// Env entries every agent container starts with, in this order.
pub const RESERVED_ENV: [&str; 3] = ["MODEL", "INSTRUCTION", "LOG_LEVEL"];

/// Where and how agents are deployed. Fixed for the lifetime of a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    pub namespace: String,
    pub image: String,
    pub container_port: u16,
    pub service_port: u16,
}

impl Default for DeploymentTarget {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for DeploymentTarget {
    fn from(config: &ServerConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            image: config.agent_image.clone(),
            container_port: config.container_port,
            service_port: config.service_port,
        }
    }
}

// ── Manifest types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// `apps/v1` Deployment running one agent container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadManifest {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ObjectMeta,
    pub spec: DeploymentSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentSpec {
    pub replicas: u32,
    pub selector: LabelSelector,
    pub template: PodTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    pub match_labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodTemplate {
    pub metadata: ObjectMeta,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub name: String,
    pub image: String,
    pub env: Vec<EnvVar>,
    pub ports: Vec<ContainerPort>,
    pub resources: ResourceRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub container_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRequirements {
    pub requests: ResourceList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceList {
    pub cpu: String,
    pub memory: String,
}

/// `v1` Service exposing an agent's container port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceManifest {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    pub selector: BTreeMap<String, String>,
    pub ports: Vec<ServicePort>,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    pub protocol: &'static str,
    pub port: u16,
    pub target_port: u16,
}

/// How a service is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceType {
    /// Reachable only from inside the cluster.
    #[serde(rename = "ClusterIP")]
    ClusterIp,
    /// Fronted by the cloud provider's external load balancer.
    LoadBalancer,
}

impl WorkloadManifest {
    /// Object name, `<agent>-deployment`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    /// Env-var names of the agent container, in manifest order.
    #[must_use]
    pub fn env_names(&self) -> Vec<&str> {
        self.spec
            .template
            .spec
            .containers
            .iter()
            .flat_map(|c| c.env.iter().map(|e| e.name.as_str()))
            .collect()
    }

    #[must_use]
    pub fn config_hash(&self) -> Option<&str> {
        self.spec
            .template
            .metadata
            .annotations
            .get(CONFIG_HASH_ANNOTATION)
            .map(String::as_str)
    }

    #[must_use]
    pub fn secrets_hash(&self) -> Option<&str> {
        self.spec
            .template
            .metadata
            .annotations
            .get(SECRETS_HASH_ANNOTATION)
            .map(String::as_str)
    }
}

impl ServiceManifest {
    /// Object name, `<agent>-service`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn service_type(&self) -> ServiceType {
        self.spec.service_type
    }
}

// ── Naming ────────────────────────────────────────────────────────────────────

#[must_use]
pub fn deployment_name(agent: &str) -> String {
    format!("{agent}-deployment")
}

#[must_use]
pub fn service_name(agent: &str) -> String {
    format!("{agent}-service")
}

fn app_labels(agent: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("app".to_string(), agent.to_string())])
}

// ── Hashing ───────────────────────────────────────────────────────────────────

fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// SHA-256 of the sorted-key JSON form of `config`.
///
/// The key order comes from the `BTreeMap` built here, never from the JSON
/// library's map type. Nested fields are flattened to dotted keys.
///
/// # Errors
///
/// Returns [`ManifestError::Hash`] if the canonical form cannot be encoded.
pub fn config_hash(config: &AgentConfig) -> Result<String, ManifestError> {
    let canonical: BTreeMap<&str, Value> = BTreeMap::from([
        ("cloud", Value::from(String::from(config.cloud.clone()))),
        ("endpoints", Value::from(config.endpoints.clone())),
        ("instruction", Value::from(config.instruction.as_str())),
        ("logging", Value::from(config.logging.as_str())),
        ("model", Value::from(config.model.as_str())),
        ("name", Value::from(config.name.as_str())),
        ("replicas", Value::from(config.replicas)),
        ("resources.cpu", Value::from(config.resources.cpu.as_str())),
        ("resources.memory", Value::from(config.resources.memory.as_str())),
    ]);
    let encoded = serde_json::to_string(&canonical)
        .map_err(|source| ManifestError::Hash { what: "agent config", source })?;
    Ok(sha256_hex(&encoded))
}

/// SHA-256 of the sorted-key JSON form of `secrets`.
///
/// # Errors
///
/// Returns [`ManifestError::Hash`] if the canonical form cannot be encoded.
pub fn secrets_hash(secrets: &SecretSet) -> Result<String, ManifestError> {
    let encoded = serde_json::to_string(&secrets.sorted())
        .map_err(|source| ManifestError::Hash { what: "secrets", source })?;
    Ok(sha256_hex(&encoded))
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Container env: the reserved entries first, then each secret in supplied
/// order. A secret named like a reserved entry replaces its value in place.
fn container_env(config: &AgentConfig, secrets: &SecretSet) -> Vec<EnvVar> {
    let mut env: Vec<EnvVar> = RESERVED_ENV
        .iter()
        .zip([&config.model, &config.instruction, &config.logging])
        .map(|(name, value)| EnvVar {
            name: (*name).to_string(),
            value: value.clone(),
        })
        .collect();

    for (key, value) in secrets.iter() {
        if let Some(existing) = env.iter_mut().find(|e| e.name == key) {
            existing.value = value.to_string();
        } else {
            env.push(EnvVar {
                name: key.to_string(),
                value: value.to_string(),
            });
        }
    }
    env
}

/// Build the Deployment for `config`.
///
/// Deterministic: identical config and secrets give an identical manifest,
/// hashes included.
///
/// # Errors
///
/// Returns [`ManifestError`] if a content hash cannot be computed.
pub fn build_workload_manifest(
    config: &AgentConfig,
    secrets: &SecretSet,
    target: &DeploymentTarget,
) -> Result<WorkloadManifest, ManifestError> {
    let name = &config.name;
    let annotations = BTreeMap::from([
        (CONFIG_HASH_ANNOTATION.to_string(), config_hash(config)?),
        (SECRETS_HASH_ANNOTATION.to_string(), secrets_hash(secrets)?),
    ]);

    Ok(WorkloadManifest {
        api_version: "apps/v1",
        kind: "Deployment",
        metadata: ObjectMeta {
            name: Some(deployment_name(name)),
            namespace: Some(target.namespace.clone()),
            labels: app_labels(name),
            annotations: BTreeMap::new(),
        },
        spec: DeploymentSpec {
            replicas: config.replicas,
            selector: LabelSelector {
                match_labels: app_labels(name),
            },
            template: PodTemplate {
                metadata: ObjectMeta {
                    name: None,
                    namespace: None,
                    labels: app_labels(name),
                    annotations,
                },
                spec: PodSpec {
                    containers: vec![Container {
                        name: name.clone(),
                        image: target.image.clone(),
                        env: container_env(config, secrets),
                        ports: vec![ContainerPort {
                            container_port: target.container_port,
                        }],
                        resources: ResourceRequirements {
                            requests: ResourceList {
                                cpu: config.resources.cpu.clone(),
                                memory: config.resources.memory.clone(),
                            },
                        },
                    }],
                },
            },
        },
    })
}

/// Build the Service for `config`. Load-balanced only on DigitalOcean.
#[must_use]
pub fn build_service_manifest(config: &AgentConfig, target: &DeploymentTarget) -> ServiceManifest {
    let name = &config.name;
    let service_type = if config.cloud.is_load_balanced() {
        ServiceType::LoadBalancer
    } else {
        ServiceType::ClusterIp
    };

    ServiceManifest {
        api_version: "v1",
        kind: "Service",
        metadata: ObjectMeta {
            name: Some(service_name(name)),
            namespace: Some(target.namespace.clone()),
            labels: app_labels(name),
            annotations: BTreeMap::new(),
        },
        spec: ServiceSpec {
            selector: app_labels(name),
            ports: vec![ServicePort {
                protocol: "TCP",
                port: target.service_port,
                target_port: target.container_port,
            }],
            service_type,
        },
    }
}
