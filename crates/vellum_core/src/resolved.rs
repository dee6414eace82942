//! The unified per-file output of a sync run.

use crate::{AssetId, RemoteAsset};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An asset published by a run, whether it was skipped or freshly uploaded.
///
/// The ordered list of resolved assets is written to the snapshot document
/// `[{ id, filename, name, alt, title, focus, content_type }, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct ResolvedAsset {
    /// Remote identifier
    id: AssetId,
    /// CDN-addressable filename
    filename: String,
    /// Display name, falling back to the local filename
    name: String,
    /// Alt text, empty when unset
    alt: String,
    /// Title, empty when unset
    title: String,
    /// Focal point hint
    focus: Option<String>,
    /// MIME type
    content_type: Option<String>,
}

impl ResolvedAsset {
    /// Build the published record for `local_name` from a remote asset.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::{AssetId, RemoteAssetBuilder, ResolvedAsset};
    ///
    /// let remote = RemoteAssetBuilder::default()
    ///     .id(AssetId::from(7u64))
    ///     .filename("https://a.storyblok.com/f/1/x/cover.png")
    ///     .content_type("image/png")
    ///     .build()
    ///     .unwrap();
    ///
    /// let resolved = ResolvedAsset::from_remote(&remote, "cover.png");
    /// assert_eq!(resolved.name(), "cover.png");
    /// assert_eq!(resolved.alt(), "");
    /// assert!(resolved.focus().is_none());
    /// ```
    pub fn from_remote(asset: &RemoteAsset, local_name: &str) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        Self {
            id: asset.id().clone(),
            filename: asset.filename().clone(),
            name: non_empty(asset.name()).unwrap_or_else(|| local_name.to_string()),
            alt: asset.alt().clone().unwrap_or_default(),
            title: asset.title().clone().unwrap_or_default(),
            focus: non_empty(asset.focus()),
            content_type: asset.content_type().clone(),
        }
    }
}
