//! JSON file backend for the asset registry.

use crate::RegistryStore;
use crate::atomic::write_atomic;
use std::path::{Path, PathBuf};
use vellum_core::Registry;
use vellum_error::{
    RegistryError, RegistryErrorKind, StorageError, StorageErrorKind, VellumResult,
};

/// Registry persisted as a single pretty-printed JSON document.
///
/// ```text
/// {
///   "assets": {
///     "cover.png": { "id": 123, "hash": "…", "filename": "https://…", "uploadedAt": "…" }
///   },
///   "lastSync": "2025-03-14T09:30:00Z"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonRegistryStore {
    path: PathBuf,
}

impl JsonRegistryStore {
    /// Store backed by the document at `path`. Nothing is touched until `load`/`save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Document location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl RegistryStore for JsonRegistryStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> VellumResult<Registry> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No registry document yet, starting empty");
                return Ok(Registry::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let registry: Registry = serde_json::from_str(&data).map_err(|e| {
            RegistryError::new(RegistryErrorKind::Corrupt {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        tracing::debug!(entries = registry.len(), "Loaded registry");
        Ok(registry)
    }

    #[tracing::instrument(skip(self, registry), fields(path = %self.path.display(), entries = registry.len()))]
    async fn save(&self, registry: &mut Registry) -> VellumResult<()> {
        registry.mark_synced(chrono::Utc::now());

        let json = serde_json::to_string_pretty(registry)
            .map_err(|e| RegistryError::new(RegistryErrorKind::Serialize(e.to_string())))?;
        write_atomic(&self.path, json.as_bytes()).await?;

        tracing::info!("Updated asset registry");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
