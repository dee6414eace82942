//! JSON file backend for the resolved asset snapshot.

use crate::SnapshotStore;
use crate::atomic::write_atomic;
use std::path::{Path, PathBuf};
use vellum_core::ResolvedAsset;
use vellum_error::{JsonError, StorageError, StorageErrorKind, VellumResult};

/// Snapshot persisted as a JSON array, fully overwritten by each run.
///
/// Downstream content tools read it as "the current asset set".
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Store backed by the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Document location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SnapshotStore for JsonSnapshotStore {
    #[tracing::instrument(skip(self, assets), fields(path = %self.path.display(), count = assets.len()))]
    async fn save(&self, assets: &[ResolvedAsset]) -> VellumResult<()> {
        let json = serde_json::to_string_pretty(assets)
            .map_err(|e| JsonError::new(format!("Failed to serialize snapshot: {}", e)))?;
        write_atomic(&self.path, json.as_bytes()).await?;

        tracing::debug!("Wrote resolved asset snapshot");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> VellumResult<Option<Vec<ResolvedAsset>>> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let assets = serde_json::from_str(&data).map_err(|e| {
            JsonError::new(format!(
                "Failed to parse snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(Some(assets))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
