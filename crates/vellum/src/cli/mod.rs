//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vellum binary.

mod assets;
mod commands;
mod status;
mod sync;

pub use assets::handle_assets;
pub use commands::{Cli, Commands};
pub use status::handle_status;
pub use sync::handle_sync;

use std::sync::Arc;
use vellum::{
    JsonRegistryStore, JsonSnapshotStore, ManagementClient, SyncEngine, SyncOptions,
    VellumConfig, VellumResult,
};

/// Validate credentials, confirm the space is reachable, and assemble the engine.
async fn connect(config: &VellumConfig) -> VellumResult<SyncEngine> {
    config.validate()?;

    let client = ManagementClient::new(&config.remote)?;
    let space = client.check_connection().await?;
    println!("Connected to space: {}", space.name);

    Ok(SyncEngine::new(
        Arc::new(client),
        Arc::new(JsonRegistryStore::new(&config.sync.registry_path)),
        Arc::new(JsonSnapshotStore::new(&config.sync.snapshot_path)),
        SyncOptions::from_config(config),
    ))
}
