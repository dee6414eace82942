//! The local registry of previous uploads.

use crate::{AssetId, ContentFingerprint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What was uploaded for one local file.
///
/// Created or overwritten only after a successful upload. Entries are never removed
/// automatically, even when the local file disappears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Remote identifier returned by the finalize step
    #[serde(rename = "id")]
    pub remote_asset_id: AssetId,
    /// Fingerprint of the bytes that were uploaded
    #[serde(rename = "hash")]
    pub fingerprint: ContentFingerprint,
    /// CDN-addressable filename reported by the remote
    #[serde(rename = "filename")]
    pub remote_filename: String,
    /// When the upload completed
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

/// Mapping from local filename to its last successful upload.
///
/// Persisted as `{ "assets": { name: entry }, "lastSync": timestamp | null }`.
///
/// # Examples
///
/// ```
/// use vellum_core::{AssetId, ContentFingerprint, Registry, RegistryEntry};
///
/// let mut registry = Registry::new();
/// assert!(registry.last_synced_at().is_none());
///
/// registry.record_upload(
///     "cover.png",
///     RegistryEntry {
///         remote_asset_id: AssetId::from(42u64),
///         fingerprint: ContentFingerprint::from_hex("ab12"),
///         remote_filename: "https://a.storyblok.com/f/1/cover.png".to_string(),
///         uploaded_at: chrono::Utc::now(),
///     },
/// );
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("cover.png").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(rename = "assets")]
    entries: BTreeMap<String, RegistryEntry>,
    #[serde(rename = "lastSync", default)]
    last_synced_at: Option<DateTime<Utc>>,
}

impl Registry {
    /// An empty registry that has never been synced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for a local filename.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    /// Insert or overwrite the entry for a local filename.
    pub fn record_upload(&mut self, name: impl Into<String>, entry: RegistryEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// All entries, ordered by filename.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &RegistryEntry)> {
        self.entries.iter()
    }

    /// Number of tracked files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time of the last save, if any.
    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Stamp the registry as saved at `at`.
    pub fn mark_synced(&mut self, at: DateTime<Utc>) {
        self.last_synced_at = Some(at);
    }
}
