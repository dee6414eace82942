//! The skip-or-upload rule.

use crate::RemoteIndex;
use vellum_core::{ContentFingerprint, RegistryEntry, RemoteAsset, UploadReason};

/// Outcome of [`decide`] for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<'a> {
    /// Reuse the listed asset.
    Skip(&'a RemoteAsset),
    /// Run the upload handshake.
    Upload(UploadReason),
}

/// Decide whether a file with `fingerprint` must be uploaded.
///
/// Pure: no I/O, no logging.
///
/// # Examples
///
/// ```
/// use vellum_core::{ContentFingerprint, UploadReason};
/// use vellum_sync::{Decision, RemoteIndex, decide};
///
/// let remote = RemoteIndex::default();
/// let fp = ContentFingerprint::from_hex("ab12");
/// assert_eq!(
///     decide(None, &fp, &remote),
///     Decision::Upload(UploadReason::Untracked)
/// );
/// ```
pub fn decide<'a>(
    entry: Option<&RegistryEntry>,
    fingerprint: &ContentFingerprint,
    remote: &'a RemoteIndex,
) -> Decision<'a> {
    let Some(entry) = entry else {
        return Decision::Upload(UploadReason::Untracked);
    };
    if entry.fingerprint != *fingerprint {
        return Decision::Upload(UploadReason::ContentChanged);
    }
    match remote.get(&entry.remote_asset_id) {
        Some(asset) => Decision::Skip(asset),
        None => Decision::Upload(UploadReason::RemoteMissing),
    }
}

/// Whether the divergence advisory applies: a remote namesake exists and the registry
/// does not vouch for the current bytes.
pub(crate) fn is_divergent(
    namesake: Option<&RemoteAsset>,
    entry: Option<&RegistryEntry>,
    fingerprint: &ContentFingerprint,
) -> bool {
    namesake.is_some() && entry.map(|e| &e.fingerprint) != Some(fingerprint)
}
