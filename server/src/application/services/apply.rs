//! Application service: write rendered manifests and apply them.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::process::Output;

use anyhow::Context;
use paragon_common::ServiceAddress;
use tracing::{error, info};

use crate::application::ports::ManifestStore;
use crate::application::services::kubectl::{Kubectl, stderr_text};
use crate::domain::agent::{ServiceManifest, WorkloadManifest, resolve_service_address};
use crate::domain::error::DeployError;

fn check(output: Output, command: String) -> Result<Output, DeployError> {
    if output.status.success() {
        Ok(output)
    } else {
        let stderr = stderr_text(&output);
        error!(%command, %stderr, "cluster command failed");
        Err(DeployError::Cluster { command, stderr })
    }
}

/// Apply `workload` then `service`, and resolve the service's address.
///
/// Steps:
/// 1. Render both manifests as YAML and write them through `store`
///    (`<name>.yaml`, replacing any previous file).
/// 2. `kubectl apply` the workload, then the service. The first nonzero
///    exit aborts; a workload that was already applied stays applied.
/// 3. Query the service once and resolve its address. No polling.
///
/// # Errors
///
/// [`DeployError::Cluster`] when a `kubectl` command exits nonzero, carrying
/// its stderr; [`DeployError::Unexpected`] for anything else (spawn failure,
/// timeout, I/O, unparseable output).
pub async fn apply_manifests(
    kubectl: &Kubectl<'_>,
    store: &dyn ManifestStore,
    workload: &WorkloadManifest,
    service: &ServiceManifest,
) -> Result<ServiceAddress, DeployError> {
    let workload_yaml =
        serde_yaml::to_string(workload).context("serializing deployment manifest")?;
    let service_yaml = serde_yaml::to_string(service).context("serializing service manifest")?;

    let workload_path = store
        .write_manifest(&format!("{}.yaml", workload.name()), &workload_yaml)
        .await?;
    let service_path = store
        .write_manifest(&format!("{}.yaml", service.name()), &service_yaml)
        .await?;

    let namespace = workload.namespace();
    for path in [&workload_path, &service_path] {
        let out = kubectl.apply_file(path, namespace).await?;
        check(
            out,
            format!("{} apply -f {} -n {namespace}", kubectl.program(), path.display()),
        )?;
        info!(manifest = %path.display(), namespace, "manifest applied");
    }

    let out = kubectl
        .get_service_json(service.name(), service.namespace())
        .await?;
    let out = check(
        out,
        format!(
            "{} get svc {} -n {} -o json",
            kubectl.program(),
            service.name(),
            service.namespace()
        ),
    )?;
    let observed: serde_json::Value =
        serde_json::from_slice(&out.stdout).context("parsing kubectl get svc output")?;

    Ok(resolve_service_address(service, &observed))
}
