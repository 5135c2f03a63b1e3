//! Application service: best-effort namespace creation.

use tracing::{debug, info, warn};

use crate::application::services::kubectl::{Kubectl, stderr_text};

/// Whether `kubectl create namespace` failed only because the namespace is
/// already there.
#[must_use]
pub fn is_already_exists(stderr: &str) -> bool {
    stderr.contains("AlreadyExists") || stderr.to_ascii_lowercase().contains("already exists")
}

/// Ensure `namespace` exists before anything is applied into it.
///
/// Never fails: "already exists" is logged at debug level, and any other
/// failure is logged as a warning and swallowed. Callers must not assume the
/// namespace exists afterwards, only that creation was attempted.
pub async fn ensure_namespace(kubectl: &Kubectl<'_>, namespace: &str) {
    match kubectl.create_namespace(namespace).await {
        Ok(out) if out.status.success() => {
            info!(namespace, "namespace created");
        }
        Ok(out) => {
            let stderr = stderr_text(&out);
            if is_already_exists(&stderr) {
                debug!(namespace, "namespace already exists");
            } else {
                warn!(namespace, %stderr, "namespace creation failed; continuing");
            }
        }
        Err(e) => {
            warn!(namespace, error = %format!("{e:#}"), "error creating namespace; continuing");
        }
    }
}
