//! Sync engine for Vellum.
//!
//! Given the listing of a media directory, the engine decides per file whether the
//! remote library already holds its exact bytes, uploads everything else through the
//! signed handshake, and keeps the local registry in step.
//!
//! # Decision rule
//!
//! A file is skipped only when all three hold:
//!
//! 1. the registry has an entry under its name,
//! 2. the entry's fingerprint equals the file's current fingerprint,
//! 3. the entry's remote asset is still present in this run's remote listing.
//!
//! Anything else is uploaded. See [`decide`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vellum_core::VellumConfig;
//! use vellum_remote::ManagementClient;
//! use vellum_storage::{JsonRegistryStore, JsonSnapshotStore, scan_media_dir};
//! use vellum_sync::{SyncEngine, SyncOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VellumConfig::load(None)?;
//! let engine = SyncEngine::new(
//!     Arc::new(ManagementClient::new(&config.remote)?),
//!     Arc::new(JsonRegistryStore::new(&config.sync.registry_path)),
//!     Arc::new(JsonSnapshotStore::new(&config.sync.snapshot_path)),
//!     SyncOptions::from_config(&config),
//! );
//!
//! let files = scan_media_dir(&config.sync.media_dir).await?;
//! let report = engine.run(&files).await?;
//! println!("Uploaded {} of {}", report.uploaded(), report.total());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decision;
mod engine;
mod index;

pub use decision::{Decision, decide};
pub use engine::{SyncEngine, SyncOptions};
pub use index::RemoteIndex;
