//! The `sync` command.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;
use vellum::{FileOutcome, VellumConfig, VellumResult, scan_media_dir};

/// Run a full sync and print the summary.
///
/// Files that fail to upload are listed but do not make the command fail.
pub async fn handle_sync(config: &VellumConfig) -> VellumResult<()> {
    let engine = super::connect(config).await?;

    let interrupt = engine.interrupt_handle();
    tokio::spawn(async move {
        if watch_interrupts(tokio::signal::ctrl_c, interrupt).await {
            eprintln!("Interrupted again, exiting without saving");
            std::process::exit(130);
        }
    });

    let files = scan_media_dir(&config.sync.media_dir).await?;
    println!(
        "Found {} images in {}",
        files.len(),
        config.sync.media_dir.display()
    );

    let report = engine.run(&files).await?;

    for file in &report.files {
        match &file.outcome {
            FileOutcome::Failed { error, .. } => {
                println!("  failed      {} ({}: {})", file.name, error.step, error.cause)
            }
            FileOutcome::Unreadable { error } => {
                println!("  unreadable  {} ({})", file.name, error.kind)
            }
            FileOutcome::Uploaded { .. } | FileOutcome::Skipped { .. } => {}
        }
    }

    println!();
    println!("Summary:");
    println!("  Uploaded: {}", report.uploaded());
    println!("  Skipped:  {}", report.skipped());
    println!("  Failed:   {}", report.failed());
    println!("  Total:    {}", report.total());
    if report.interrupted {
        println!("  Interrupted before all files were processed");
    }
    println!("Asset list written to {}", config.sync.snapshot_path.display());

    Ok(())
}

/// Set `interrupt` on the first signal; return `true` on the second.
///
/// Returns `false` if signals cannot be received.
async fn watch_interrupts<F, Fut>(mut next_signal: F, interrupt: Arc<AtomicBool>) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if next_signal().await.is_err() {
        return false;
    }
    warn!("Interrupt received, finishing the current file (press Ctrl-C again to exit)");
    interrupt.store(true, Ordering::SeqCst);

    next_signal().await.is_ok()
}
