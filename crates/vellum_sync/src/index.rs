//! Per-run view of the remote library.

use std::collections::HashMap;
use vellum_core::{AssetId, LocalFile, RemoteAsset};

/// The remote listing fetched at the start of a run, indexed by identifier.
///
/// Built once and never refreshed; uploads made during the run are not added.
#[derive(Debug, Clone, Default)]
pub struct RemoteIndex {
    assets: Vec<RemoteAsset>,
    by_id: HashMap<AssetId, usize>,
}

impl RemoteIndex {
    /// Index a listing.
    pub fn new(assets: Vec<RemoteAsset>) -> Self {
        let by_id = assets
            .iter()
            .enumerate()
            .map(|(position, asset)| (asset.id().clone(), position))
            .collect();
        Self { assets, by_id }
    }

    /// The asset with `id`, if it was listed.
    pub fn get(&self, id: &AssetId) -> Option<&RemoteAsset> {
        self.by_id.get(id).map(|&position| &self.assets[position])
    }

    /// Number of listed assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the remote library is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// First remote asset that looks like a copy of `file`: same display name, or a
    /// filename containing the file's stem.
    pub fn find_namesake(&self, file: &LocalFile) -> Option<&RemoteAsset> {
        let stem = file.stem();
        self.assets.iter().find(|asset| {
            asset.name().as_deref() == Some(file.name().as_str())
                || (!stem.is_empty() && asset.filename().contains(stem))
        })
    }
}
