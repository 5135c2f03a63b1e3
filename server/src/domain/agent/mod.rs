//! Domain logic for agent deployment: pure functions, no I/O, no async.
//!
//! This module has zero imports from `crate::infra`, `crate::api`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.

pub mod address;
pub mod manifest;
pub mod validate;

pub use address::resolve_service_address;
pub use manifest::{
    DeploymentTarget, ServiceManifest, ServiceType, WorkloadManifest, build_service_manifest,
    build_workload_manifest, deployment_name, service_name,
};
pub use validate::{MAX_AGENT_NAME_LEN, is_valid_agent_name, validate_config};
