//! The `assets` command.

use super::commands::OutputFormat;
use vellum::{JsonError, JsonSnapshotStore, SnapshotStore, VellumConfig, VellumResult};

/// Print the resolved asset list from the last sync.
pub async fn handle_assets(config: &VellumConfig, format: OutputFormat) -> VellumResult<()> {
    let store = JsonSnapshotStore::new(&config.sync.snapshot_path);
    let Some(assets) = store.load().await? else {
        eprintln!(
            "No uploaded assets found at {}. Run `vellum sync` first.",
            config.sync.snapshot_path.display()
        );
        return Ok(());
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&assets)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for asset in &assets {
                println!("{:<12} {}", asset.id().to_string(), asset.name());
                println!("{:<12} {}", "", asset.filename());
                if !asset.alt().is_empty() {
                    println!("{:<12} alt: {}", "", asset.alt());
                }
            }
            println!("{:-<80}", "");
            println!("Total: {} assets", assets.len());
        }
    }

    Ok(())
}
