//! Content fingerprints.

use sha2::{Digest, Sha256};
use std::path::Path;
use vellum_core::ContentFingerprint;
use vellum_error::{StorageError, StorageErrorKind, VellumResult};

/// Compute the SHA-256 fingerprint of `data`.
///
/// # Examples
///
/// ```
/// use vellum_storage::fingerprint_bytes;
///
/// let fp = fingerprint_bytes(b"");
/// assert_eq!(
///     fp.as_str(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn fingerprint_bytes(data: &[u8]) -> ContentFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(data);
    ContentFingerprint::from_hex(format!("{:x}", hasher.finalize()))
}

/// Read the whole file at `path`.
///
/// The sync engine hashes and uploads the same buffer, so the registry always
/// describes the bytes that were sent.
///
/// # Errors
///
/// Returns a storage error if the file cannot be read.
pub async fn read_media(path: impl AsRef<Path>) -> VellumResult<Vec<u8>> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
        } else {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        }
    })?;
    Ok(data)
}

/// Read the whole file at `path` and fingerprint it.
///
/// # Errors
///
/// Returns a storage error if the file cannot be read.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn fingerprint_file(path: impl AsRef<Path>) -> VellumResult<ContentFingerprint> {
    let data = read_media(path).await?;
    let fingerprint = fingerprint_bytes(&data);
    tracing::trace!(size = data.len(), fingerprint = %fingerprint.short(), "Fingerprinted file");
    Ok(fingerprint)
}
