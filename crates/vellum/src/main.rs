//! Vellum CLI binary.
//!
//! This binary provides command-line access to Vellum's functionality:
//! - Sync a media directory to the asset library
//! - Preview what a sync would upload
//! - Print the asset list published by the last sync

use clap::Parser;
use vellum::{VellumConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_assets, handle_status, handle_sync};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load .env before configuration reads the environment
    let _ = dotenvy::dotenv();

    init_logging(cli.verbose, cli.log_format.into())?;

    let mut config = VellumConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Loaded configuration");

    // Execute the requested command
    match cli.command {
        Commands::Sync {
            media_dir,
            folder_id,
        } => {
            if let Some(dir) = media_dir {
                config.sync.media_dir = dir;
            }
            if folder_id.is_some() {
                config.sync.asset_folder_id = folder_id;
            }
            handle_sync(&config).await?;
        }

        Commands::Status { media_dir } => {
            if let Some(dir) = media_dir {
                config.sync.media_dir = dir;
            }
            handle_status(&config).await?;
        }

        Commands::Assets { format } => {
            handle_assets(&config, format).await?;
        }
    }

    Ok(())
}
