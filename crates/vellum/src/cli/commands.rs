//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vellum_core::LogFormat;

/// Vellum - upload local media to a Storyblok asset library, once per distinct content
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(about = "Upload local media to a Storyblok asset library, once per distinct content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload new and changed media, then write the resolved asset list
    Sync {
        /// Directory to scan instead of the configured one
        #[arg(long)]
        media_dir: Option<PathBuf>,

        /// Remote folder for new uploads
        #[arg(long)]
        folder_id: Option<u64>,
    },

    /// Show what a sync would do without uploading anything
    Status {
        /// Directory to scan instead of the configured one
        #[arg(long)]
        media_dir: Option<PathBuf>,
    },

    /// Print the resolved asset list written by the last sync
    Assets {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Log format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sync_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "vellum",
            "sync",
            "--media-dir",
            "assets/img",
            "--folder-id",
            "42",
        ])
        .unwrap();

        match cli.command {
            Commands::Sync {
                media_dir,
                folder_id,
            } => {
                assert_eq!(media_dir, Some(PathBuf::from("assets/img")));
                assert_eq!(folder_id, Some(42));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_format, LogFormatArg::Pretty);
        assert!(!cli.verbose);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "vellum",
            "status",
            "--verbose",
            "--log-format",
            "json",
            "--config",
            "ci.toml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
    }

    #[test]
    fn assets_format_defaults_to_human() {
        let cli = Cli::try_parse_from(["vellum", "assets"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Assets {
                format: OutputFormat::Human
            }
        ));
    }

    #[test]
    fn folder_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["vellum", "sync", "--folder-id", "blog"]).is_err());
    }
}
