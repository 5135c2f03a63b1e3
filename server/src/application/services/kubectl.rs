//! Thin `kubectl` command builder over the [`CommandRunner`] port.
//!
//! Only assembles argument lists; interpreting exit status is left to the
//! calling service.

use std::path::Path;
use std::process::Output;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

pub struct Kubectl<'a> {
    runner: &'a dyn CommandRunner,
    program: &'a str,
}

impl<'a> Kubectl<'a> {
    #[must_use]
    pub fn new(runner: &'a dyn CommandRunner, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Program name, for log and error messages.
    #[must_use]
    pub fn program(&self) -> &str {
        self.program
    }

    /// Run `kubectl create namespace <namespace>`.
    pub async fn create_namespace(&self, namespace: &str) -> Result<Output> {
        self.runner
            .run(self.program, &["create", "namespace", namespace])
            .await
            .with_context(|| format!("failed to run {} create namespace", self.program))
    }

    /// Run `kubectl apply -f <manifest> -n <namespace>`.
    pub async fn apply_file(&self, manifest: &Path, namespace: &str) -> Result<Output> {
        let path = manifest.to_string_lossy();
        self.runner
            .run(self.program, &["apply", "-f", &path, "-n", namespace])
            .await
            .with_context(|| format!("failed to run {} apply -f {path}", self.program))
    }

    /// Run `kubectl get svc <service> -n <namespace> -o json`.
    pub async fn get_service_json(&self, service: &str, namespace: &str) -> Result<Output> {
        self.runner
            .run(
                self.program,
                &["get", "svc", service, "-n", namespace, "-o", "json"],
            )
            .await
            .with_context(|| format!("failed to run {} get svc {service}", self.program))
    }
}

/// Trimmed, lossily decoded stderr of a finished command.
#[must_use]
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
