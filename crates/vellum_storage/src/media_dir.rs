//! Media directory listing.

use std::path::Path;
use vellum_core::LocalFile;
use vellum_error::{StorageError, StorageErrorKind, VellumResult};

/// List the allow-listed images directly inside `dir`.
///
/// Subdirectories and files with other extensions are ignored. The listing is
/// ordered by filename so every run visits files in the same order regardless of
/// the filesystem.
///
/// # Errors
///
/// Returns a storage error if the directory itself cannot be read.
#[tracing::instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
pub async fn scan_media_dir(dir: impl AsRef<Path>) -> VellumResult<Vec<LocalFile>> {
    let dir = dir.as_ref();
    let read_err = |e: std::io::Error| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::new(StorageErrorKind::NotFound(dir.display().to_string()))
        } else {
            StorageError::new(StorageErrorKind::DirectoryRead(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        }
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    let mut files = Vec::new();
    let mut ignored = 0usize;

    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        let metadata = entry.metadata().await.map_err(read_err)?;
        if !metadata.is_file() {
            continue;
        }
        match LocalFile::new(entry.path(), metadata.len()) {
            Some(file) => files.push(file),
            None => ignored += 1,
        }
    }

    files.sort_by(|a, b| a.name().cmp(b.name()));
    tracing::debug!(found = files.len(), ignored, "Scanned media directory");
    Ok(files)
}
