//! Vellum - content-addressed asset sync for a headless CMS
//!
//! Vellum uploads a directory of images to the asset library of a Storyblok space
//! exactly once per distinct content. Every file is fingerprinted, compared with a local
//! registry of earlier uploads and with the current remote listing, and only new or
//! changed files go through the signed upload handshake. Each run publishes the ordered
//! list of resolved assets for downstream content tooling.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vellum::{
//!     JsonRegistryStore, JsonSnapshotStore, ManagementClient, SyncEngine, SyncOptions,
//!     VellumConfig, scan_media_dir,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VellumConfig::load(None)?;
//!     config.validate()?;
//!
//!     let client = ManagementClient::new(&config.remote)?;
//!     client.check_connection().await?;
//!
//!     let engine = SyncEngine::new(
//!         Arc::new(client),
//!         Arc::new(JsonRegistryStore::new(&config.sync.registry_path)),
//!         Arc::new(JsonSnapshotStore::new(&config.sync.snapshot_path)),
//!         SyncOptions::from_config(&config),
//!     );
//!     let files = scan_media_dir(&config.sync.media_dir).await?;
//!     let report = engine.run(&files).await?;
//!     println!("Uploaded: {}, Skipped: {}", report.uploaded(), report.skipped());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vellum is organized as a workspace with focused crates:
//!
//! - `vellum_error` - Error types
//! - `vellum_core` - Data model, configuration, logging setup
//! - `vellum_storage` - Fingerprinting, media scan, registry and snapshot stores
//! - `vellum_remote` - Management API client and upload handshake
//! - `vellum_sync` - Sync engine
//!
//! This crate (`vellum`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use vellum_core::*;
pub use vellum_error::*;
pub use vellum_remote::*;
pub use vellum_storage::*;
pub use vellum_sync::*;
