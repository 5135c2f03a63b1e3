//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::api`, or `crate::commands`.
//!
//! Ports are object-safe and `Send + Sync` so the HTTP layer can share one
//! instance across requests behind an `Arc<dyn _>`.

use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Manifest Store Port ───────────────────────────────────────────────────────

/// Abstracts persisting rendered manifests where `kubectl apply -f` can read
/// them.
#[async_trait]
pub trait ManifestStore: Send + Sync {
    /// Write `contents` under `file_name` and return the full path.
    ///
    /// Writing the same name again replaces the previous file.
    async fn write_manifest(&self, file_name: &str, contents: &str) -> Result<PathBuf>;
}
