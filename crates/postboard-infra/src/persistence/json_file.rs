//! Durable JSON file gateway.
//!
//! The whole store lives in one pretty-printed JSON document that is
//! rewritten in full after every mutation. Writes go to a sibling temp
//! file which is then renamed over the target, so readers never observe
//! a truncated document.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use postboard_core::StoreError;
use postboard_core::domain::StoreSnapshot;
use postboard_core::ports::SnapshotStore;

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("db.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<StoreSnapshot, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let snapshot: StoreSnapshot = serde_json::from_slice(&bytes).map_err(|e| {
                    StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
                })?;
                tracing::info!(
                    path = %self.path.display(),
                    posts = snapshot.posts.len(),
                    comments = snapshot.comments.len(),
                    "Loaded store"
                );
                Ok(snapshot)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No store file found, initializing empty store");
                let snapshot = StoreSnapshot::default();
                self.save(&snapshot).await?;
                Ok(snapshot)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = replace_with(&temp_path, &self.path, &bytes).await {
            // Best effort cleanup; the write error is what gets reported.
            let cleanup = tokio::fs::remove_file(&temp_path).await.err();
            if let Some(cleanup) = cleanup.filter(|c| c.kind() != ErrorKind::NotFound) {
                tracing::warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Store persisted");
        Ok(())
    }
}

/// Write `bytes` to `temp_path`, flush them to disk, then move the file over `target`.
async fn replace_with(temp_path: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(temp_path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(temp_path, target).await
}
