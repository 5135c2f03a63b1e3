//! Filesystem infrastructure: implements `ManifestStore`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::application::ports::ManifestStore;

/// Writes manifests into a fixed directory. Files are left in place after
/// the deploy so the last applied manifests can be inspected.
pub struct FsManifestStore {
    dir: PathBuf,
}

impl FsManifestStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Write `contents` to `path` via a sibling temp file and rename, so a
/// concurrent reader never sees a half-written manifest.
fn write_atomic(dir: &Path, path: &Path, contents: &str) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating manifest dir {}", dir.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .context("writing manifest contents")?;
    tmp.persist(path)
        .with_context(|| format!("persisting manifest {}", path.display()))?;
    Ok(())
}

#[async_trait]
impl ManifestStore for FsManifestStore {
    async fn write_manifest(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        anyhow::ensure!(
            !file_name.contains('/') && !file_name.contains(".."),
            "invalid manifest file name: {file_name}"
        );
        let dir = self.dir.clone();
        let path = dir.join(file_name);
        let path_clone = path.clone();
        let contents = contents.to_string();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &path_clone, &contents))
            .await
            .context("spawn_blocking for write_manifest")??;
        Ok(path)
    }
}
