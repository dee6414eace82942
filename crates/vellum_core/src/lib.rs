//! Core data types for the Vellum asset sync toolkit.
//!
//! This crate provides the records shared by every stage of a sync run: local media
//! files and their fingerprints, the persisted registry, remote assets, the resolved
//! asset list a run publishes, and the run report. It also owns configuration loading
//! and logging initialization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset_id;
mod config;
mod fingerprint;
mod local_file;
mod registry;
mod remote_asset;
mod report;
mod resolved;
mod telemetry;

pub use asset_id::AssetId;
pub use config::{
    Checkpoint, RegistryRecovery, RemoteConfig, SyncConfig, VellumConfig, MANAGEMENT_TOKEN_VAR,
    SPACE_ID_VAR,
};
pub use fingerprint::ContentFingerprint;
pub use local_file::{LocalFile, MediaKind};
pub use registry::{Registry, RegistryEntry};
pub use remote_asset::{RemoteAsset, RemoteAssetBuilder, RemoteAssetBuilderError};
pub use report::{
    FileOutcome, FileReport, PlanEntry, PlannedAction, SyncPlan, SyncReport, UploadReason,
};
pub use resolved::ResolvedAsset;
pub use telemetry::{LogFormat, init_logging};
