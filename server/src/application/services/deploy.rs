//! Application service: the deploy-an-agent use case.
//!
//! Validates the request, then sequences namespace creation, manifest
//! building, and apply. Every failure is caught here once and returned as an
//! error [`DeploymentResult`]; callers never see raw process errors.

use std::sync::Arc;

use paragon_common::{DeploymentResult, RawAgentConfig, SecretSet, ServiceInfo};
use tracing::{error, info};

use crate::application::ports::{CommandRunner, ManifestStore};
use crate::application::services::apply::apply_manifests;
use crate::application::services::kubectl::Kubectl;
use crate::application::services::namespace::ensure_namespace;
use crate::domain::agent::{
    DeploymentTarget, ServiceManifest, WorkloadManifest, build_service_manifest,
    build_workload_manifest, validate_config,
};
use crate::domain::error::DeployError;

/// Entry point for deployments. Cheap to share behind an `Arc`.
pub struct DeploymentOrchestrator {
    runner: Arc<dyn CommandRunner>,
    store: Arc<dyn ManifestStore>,
    kubectl: String,
    target: DeploymentTarget,
}

impl DeploymentOrchestrator {
    #[must_use]
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        store: Arc<dyn ManifestStore>,
        kubectl: impl Into<String>,
        target: DeploymentTarget,
    ) -> Self {
        Self {
            runner,
            store,
            kubectl: kubectl.into(),
            target,
        }
    }

    /// Validate `raw` and build both manifests without touching the cluster.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Invalid`] when a required field is missing or
    /// the name is unusable, and [`DeployError::Manifest`] if rendering fails.
    pub fn plan(
        &self,
        raw: &RawAgentConfig,
        secrets: &SecretSet,
    ) -> Result<(WorkloadManifest, ServiceManifest), DeployError> {
        let config = validate_config(raw)?;
        Ok((
            build_workload_manifest(&config, secrets, &self.target)?,
            build_service_manifest(&config, &self.target),
        ))
    }

    /// Deploy an agent and report the outcome.
    ///
    /// A config missing a required field yields an error result before any
    /// external command runs. There is no rollback: if the workload applies
    /// and the service does not, the workload stays.
    pub async fn deploy(&self, raw: &RawAgentConfig, secrets: &SecretSet) -> DeploymentResult {
        match self.try_deploy(raw, secrets).await {
            Ok(result) => result,
            Err(e) => {
                let agent = raw.name.as_deref().unwrap_or("<unnamed>");
                error!(agent, kind = ?e.kind(), error = %e, "agent deployment failed");
                DeploymentResult::error(e.kind(), e.to_string())
            }
        }
    }

    async fn try_deploy(
        &self,
        raw: &RawAgentConfig,
        secrets: &SecretSet,
    ) -> Result<DeploymentResult, DeployError> {
        let config = validate_config(raw)?;
        let kubectl = Kubectl::new(self.runner.as_ref(), &self.kubectl);

        ensure_namespace(&kubectl, &self.target.namespace).await;

        let workload = build_workload_manifest(&config, secrets, &self.target)?;
        let service = build_service_manifest(&config, &self.target);
        info!(
            agent = %config.name,
            namespace = %self.target.namespace,
            replicas = config.replicas,
            service_type = ?service.service_type(),
            secrets = secrets.len(),
            "applying agent manifests"
        );

        let url = apply_manifests(&kubectl, self.store.as_ref(), &workload, &service).await?;
        info!(agent = %config.name, %url, "agent deployed");

        Ok(DeploymentResult::success(
            format!("Agent {} deployed successfully", config.name),
            ServiceInfo {
                name: service.name().to_string(),
                namespace: service.namespace().to_string(),
                endpoints: config.endpoints,
                url,
            },
        ))
    }
}
