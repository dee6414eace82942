//! Configuration structures for Vellum.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from vellum.toml)
//! - User overrides (~/.config/vellum/vellum.toml, then ./vellum.toml)
//! - An explicit file passed on the command line
//! - Environment: `STORYBLOK_SPACE_ID`, `STORYBLOK_MANAGEMENT_TOKEN` and
//!   `VELLUM__SECTION__KEY` overrides
//!
//! The resulting [`VellumConfig`] is built once at process start and handed to every
//! component by reference. Nothing else reads the environment.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};
use vellum_error::{ConfigError, VellumResult};

/// Environment variable holding the numeric space identifier.
pub const SPACE_ID_VAR: &str = "STORYBLOK_SPACE_ID";

/// Environment variable holding the personal access / OAuth token for the management API.
pub const MANAGEMENT_TOKEN_VAR: &str = "STORYBLOK_MANAGEMENT_TOKEN";

/// What to do when the registry document cannot be parsed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum RegistryRecovery {
    /// Stop the run with an error
    #[default]
    #[display("abort")]
    Abort,
    /// Continue with an empty registry, re-uploading every file
    #[display("reset")]
    Reset,
}

/// When the registry is written to disk during a run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Checkpoint {
    /// Once, after the last file (or on interrupt)
    #[default]
    #[display("end_of_run")]
    EndOfRun,
    /// After every successful upload, and again at the end
    #[display("each_file")]
    EachFile,
}

/// Connection settings for the management API.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Management API root, e.g. `https://mapi.storyblok.com/v1`
    pub base_url: String,

    /// Space identifier
    #[serde(default)]
    pub space_id: Option<String>,

    /// Management token
    #[serde(default, skip_serializing)]
    pub management_token: Option<String>,

    /// Deadline for each handshake step and each listing request
    #[serde(default = "default_step_timeout_secs")]
    pub step_timeout_secs: u64,

    /// Page size used when listing remote assets
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_step_timeout_secs() -> u64 {
    60
}

fn default_page_size() -> u32 {
    100
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("base_url", &self.base_url)
            .field("space_id", &self.space_id)
            .field(
                "management_token",
                &self.management_token.as_ref().map(|_| "<redacted>"),
            )
            .field("step_timeout_secs", &self.step_timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl RemoteConfig {
    /// Per-step deadline.
    pub fn step_timeout(&self) -> Duration {
        Duration::from_secs(self.step_timeout_secs)
    }

    /// Space identifier, or an error naming the missing variable.
    pub fn require_space_id(&self) -> Result<&str, ConfigError> {
        non_empty(self.space_id.as_deref())
            .ok_or_else(|| ConfigError::new(format!("{} is not set", SPACE_ID_VAR)))
    }

    /// Management token, or an error naming the missing variable.
    pub fn require_management_token(&self) -> Result<&str, ConfigError> {
        non_empty(self.management_token.as_deref())
            .ok_or_else(|| ConfigError::new(format!("{} is not set", MANAGEMENT_TOKEN_VAR)))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Local paths and sync behavior.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Directory scanned for images
    pub media_dir: PathBuf,

    /// Registry document location
    pub registry_path: PathBuf,

    /// Resolved-asset snapshot location
    pub snapshot_path: PathBuf,

    /// Remote folder new uploads are placed in
    #[serde(default)]
    pub asset_folder_id: Option<u64>,

    /// Policy for an unparsable registry document
    #[serde(default)]
    pub on_corrupt_registry: RegistryRecovery,

    /// Registry persistence points
    #[serde(default)]
    pub checkpoint: Checkpoint,
}

/// Top-level Vellum configuration.
///
/// # Example
///
/// ```no_run
/// use vellum_core::VellumConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VellumConfig::load(None)?;
/// config.validate()?;
/// println!("Syncing {}", config.sync.media_dir.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VellumConfig {
    /// Management API settings
    pub remote: RemoteConfig,
    /// Local sync settings
    pub sync: SyncConfig,
}

impl VellumConfig {
    /// Load configuration with precedence: environment > explicit file > current dir >
    /// home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found. The explicit
    /// file, when given, must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> VellumResult<Self> {
        debug!("Loading configuration");

        let mut user_files = Vec::new();
        if let Some(home) = dirs::home_dir() {
            user_files.push(home.join(".config/vellum/vellum.toml"));
        }
        user_files.push(PathBuf::from("vellum.toml"));

        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_sources(&user_files, explicit, &env)
    }

    /// Build configuration from explicit sources.
    ///
    /// `user_files` are optional; `explicit` is required when given; `env` stands in
    /// for the process environment.
    #[instrument(skip(env))]
    pub fn from_sources(
        user_files: &[PathBuf],
        explicit: Option<&Path>,
        env: &HashMap<String, String>,
    ) -> VellumResult<Self> {
        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../vellum.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        for path in user_files {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path));
        }

        let environment: config::Map<String, String> = env
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        builder = builder.add_source(
            Environment::with_prefix("VELLUM")
                .separator("__")
                .try_parsing(true)
                .source(Some(environment)),
        );

        let credential = |var: &str| env.get(var).filter(|v| !v.is_empty()).cloned();
        builder = builder
            .set_override_option("remote.space_id", credential(SPACE_ID_VAR))
            .and_then(|b| {
                b.set_override_option("remote.management_token", credential(MANAGEMENT_TOKEN_VAR))
            })
            .map_err(|e| ConfigError::new(format!("Failed to apply credentials: {}", e)))?;

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Check that credentials are present and numeric settings are usable.
    ///
    /// All missing credentials are reported together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.remote.require_space_id().is_err() {
            missing.push(SPACE_ID_VAR);
        }
        if self.remote.require_management_token().is_err() {
            missing.push(MANAGEMENT_TOKEN_VAR);
        }
        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        if self.remote.step_timeout_secs == 0 {
            return Err(ConfigError::new("remote.step_timeout_secs must be positive"));
        }
        if self.remote.page_size == 0 {
            return Err(ConfigError::new("remote.page_size must be positive"));
        }

        Ok(())
    }
}
