//! Content fingerprinting and local sync state for Vellum.
//!
//! This crate owns everything a sync run keeps on the local disk:
//!
//! - **Hasher**: SHA-256 fingerprints of media files
//! - **Media directory scan**: the allow-listed images a run processes
//! - **Registry store**: filename to last-uploaded fingerprint and remote identity
//! - **Snapshot store**: the resolved asset list published by the last run
//!
//! Stores are trait-based so the JSON file backends can be swapped without touching
//! the sync engine. Both file backends write through a temp file and rename, so a
//! crash mid-write never leaves a truncated document.
//!
//! # Example
//!
//! ```rust
//! use vellum_storage::{JsonRegistryStore, RegistryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonRegistryStore::new("/tmp/vellum/asset-registry.json");
//! let mut registry = store.load().await?;
//! store.save(&mut registry).await?;
//! assert!(registry.last_synced_at().is_some());
//! # Ok(())
//! # }
//! ```

use vellum_core::{Registry, ResolvedAsset};
use vellum_error::VellumResult;

mod atomic;
mod hasher;
mod media_dir;
mod registry_store;
mod snapshot;

pub use hasher::{fingerprint_bytes, fingerprint_file, read_media};
pub use media_dir::scan_media_dir;
pub use registry_store::JsonRegistryStore;
pub use snapshot::JsonSnapshotStore;

/// Persistent home of the [`Registry`].
///
/// One run owns the registry exclusively: it loads once at the start and saves at
/// well-defined checkpoints. Concurrent runs against the same location are not
/// coordinated.
#[async_trait::async_trait]
pub trait RegistryStore: Send + Sync {
    /// Read the persisted registry.
    ///
    /// A missing document yields an empty registry with no `last_synced_at`. A document
    /// that cannot be parsed yields a corrupt-registry error.
    async fn load(&self) -> VellumResult<Registry>;

    /// Overwrite the persisted registry in full.
    ///
    /// Stamps `last_synced_at` with the current time as part of the write and creates
    /// the parent location if missing.
    async fn save(&self, registry: &mut Registry) -> VellumResult<()>;

    /// Human-readable location, for log lines.
    fn location(&self) -> String;
}

/// Persistent home of the resolved asset list a run publishes.
#[async_trait::async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Replace the snapshot with `assets`, preserving their order.
    async fn save(&self, assets: &[ResolvedAsset]) -> VellumResult<()>;

    /// Read the last snapshot, or `None` if no run has written one.
    async fn load(&self) -> VellumResult<Option<Vec<ResolvedAsset>>>;

    /// Human-readable location, for log lines.
    fn location(&self) -> String;
}
