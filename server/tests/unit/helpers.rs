//! Shared test helpers: scripted port doubles and output constructors.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use paragon_common::{CloudProvider, RawAgentConfig, RawResources, RawScaling, SecretSet};
use paragon_server::application::ports::{CommandRunner, ManifestStore};
use paragon_server::application::services::DeploymentOrchestrator;
use paragon_server::domain::agent::DeploymentTarget;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8-15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

/// The `bot1` agent: ClusterIP service, one replica.
pub fn bot1() -> RawAgentConfig {
    RawAgentConfig {
        name: Some("bot1".to_string()),
        model: Some("gpt-4".to_string()),
        instruction: Some("Be helpful".to_string()),
        resources: Some(RawResources {
            cpu: Some("100m".to_string()),
            memory: Some("128Mi".to_string()),
        }),
        scaling: Some(RawScaling { replicas: Some(1) }),
        ..RawAgentConfig::default()
    }
}

/// `bot1` on DigitalOcean, which gets a LoadBalancer service.
pub fn bot1_on_digitalocean() -> RawAgentConfig {
    RawAgentConfig {
        cloud: Some(CloudProvider::DigitalOcean),
        ..bot1()
    }
}

pub fn api_key_secret() -> SecretSet {
    [("API_KEY", "k")].into_iter().collect()
}

/// `kubectl get svc -o json` output for a LoadBalancer with a published
/// hostname.
pub const LB_WITH_HOSTNAME: &[u8] =
    br#"{"spec":{"type":"LoadBalancer"},"status":{"loadBalancer":{"ingress":[{"hostname":"lb.example.com"}]}}}"#;

/// `kubectl get svc -o json` output for a LoadBalancer still provisioning.
pub const LB_PENDING: &[u8] = br#"{"spec":{"type":"LoadBalancer"},"status":{"loadBalancer":{}}}"#;

pub const CLUSTER_IP_SVC: &[u8] = br#"{"spec":{"type":"ClusterIP","clusterIP":"10.0.0.12"}}"#;

// ── Recording command runner ─────────────────────────────────────────────────

#[derive(Clone)]
enum Reply {
    Output(Output),
    SpawnError(String),
}

/// `CommandRunner` that answers from a script and records every call.
///
/// A rule matches when its pattern is a substring of the space-joined
/// argument list; the first matching rule wins. Unmatched calls succeed with
/// empty output.
#[derive(Default)]
pub struct RecordingRunner {
    rules: Vec<(String, Reply)>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Happy cluster: every command succeeds and `get svc` returns `svc_json`.
    pub fn healthy(svc_json: &[u8]) -> Self {
        Self::new().on("get svc", ok_output(svc_json))
    }

    #[must_use]
    pub fn on(mut self, pattern: &str, output: Output) -> Self {
        self.rules.push((pattern.to_string(), Reply::Output(output)));
        self
    }

    #[must_use]
    pub fn fail_spawn(mut self, pattern: &str, message: &str) -> Self {
        self.rules
            .push((pattern.to_string(), Reply::SpawnError(message.to_string())));
        self
    }

    /// Recorded argument lists, without the program name.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("lock").clone()
    }

    /// Recorded calls as space-joined strings.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.join(" ")).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, Duration::from_secs(120))
            .await
    }

    async fn run_with_timeout(
        &self,
        _program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<Output> {
        self.calls
            .lock()
            .expect("lock")
            .push(args.iter().map(ToString::to_string).collect());
        let line = args.join(" ");
        match self.rules.iter().find(|(p, _)| line.contains(p.as_str())) {
            Some((_, Reply::Output(out))) => Ok(out.clone()),
            Some((_, Reply::SpawnError(msg))) => Err(anyhow::anyhow!("{msg}")),
            None => Ok(ok_output(b"")),
        }
    }
}

// ── In-memory manifest store ─────────────────────────────────────────────────

pub const MANIFEST_DIR: &str = "/manifests";

/// `ManifestStore` keeping files in memory, in write order.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<String> {
        self.files
            .lock()
            .expect("lock")
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn contents(&self, name: &str) -> Option<String> {
        self.files
            .lock()
            .expect("lock")
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.clone())
    }
}

#[async_trait]
impl ManifestStore for MemoryStore {
    async fn write_manifest(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let mut files = self.files.lock().expect("lock");
        files.retain(|(n, _)| n != file_name);
        files.push((file_name.to_string(), contents.to_string()));
        Ok(PathBuf::from(MANIFEST_DIR).join(file_name))
    }
}

// ── Orchestrator wiring ──────────────────────────────────────────────────────

pub fn orchestrator(
    runner: &Arc<RecordingRunner>,
    store: &Arc<MemoryStore>,
) -> DeploymentOrchestrator {
    DeploymentOrchestrator::new(
        runner.clone(),
        store.clone(),
        "kubectl",
        DeploymentTarget::default(),
    )
}
