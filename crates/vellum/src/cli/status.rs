//! The `status` command.

use vellum::{PlannedAction, VellumConfig, VellumResult, scan_media_dir};

/// Print the plan a sync would follow.
pub async fn handle_status(config: &VellumConfig) -> VellumResult<()> {
    let engine = super::connect(config).await?;
    let files = scan_media_dir(&config.sync.media_dir).await?;
    let plan = engine.plan(&files).await?;

    for entry in &plan.entries {
        let action = match &entry.action {
            PlannedAction::Skip { asset_id } => {
                format!("skip        {} (asset {})", entry.name, asset_id)
            }
            PlannedAction::Upload { reason } => {
                format!("upload      {} ({})", entry.name, reason)
            }
            PlannedAction::Unreadable { error } => {
                format!("unreadable  {} ({})", entry.name, error.kind)
            }
        };
        if entry.divergent {
            println!("  {} [remote asset with the same name differs]", action);
        } else {
            println!("  {}", action);
        }
    }

    println!();
    println!(
        "{} to upload, {} unchanged, {} files",
        plan.uploads(),
        plan.skips(),
        plan.entries.len()
    );
    Ok(())
}
