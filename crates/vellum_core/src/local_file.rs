//! Local media files eligible for sync.

use derive_getters::Getters;
use std::path::{Path, PathBuf};

/// Image formats accepted from the media directory.
///
/// Anything else in the directory is ignored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum MediaKind {
    /// `.jpg`
    #[display("jpg")]
    Jpg,
    /// `.jpeg`
    #[display("jpeg")]
    Jpeg,
    /// `.png`
    #[display("png")]
    Png,
    /// `.gif`
    #[display("gif")]
    Gif,
}

impl MediaKind {
    /// Match a file extension, ignoring ASCII case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" => Some(MediaKind::Jpg),
            "jpeg" => Some(MediaKind::Jpeg),
            "png" => Some(MediaKind::Png),
            "gif" => Some(MediaKind::Gif),
            _ => None,
        }
    }

    /// MIME type sent with the blob transfer.
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaKind::Jpg | MediaKind::Jpeg => "image/jpeg",
            MediaKind::Png => "image/png",
            MediaKind::Gif => "image/gif",
        }
    }
}

/// A file in the media directory.
///
/// `name` is the base filename and is unique within the directory; it keys the registry.
///
/// # Examples
///
/// ```
/// use vellum_core::{LocalFile, MediaKind};
///
/// let file = LocalFile::new("media/cover.PNG", 2048).unwrap();
/// assert_eq!(file.name(), "cover.PNG");
/// assert_eq!(*file.kind(), MediaKind::Png);
/// assert_eq!(file.stem(), "cover");
///
/// assert!(LocalFile::new("media/notes.txt", 10).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct LocalFile {
    /// Base filename
    name: String,
    /// Full path on disk
    path: PathBuf,
    /// Size in bytes at listing time
    byte_length: u64,
    /// Format derived from the extension
    kind: MediaKind,
}

impl LocalFile {
    /// Build a local file record, or `None` if the path is not an accepted image.
    pub fn new(path: impl Into<PathBuf>, byte_length: u64) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_str()?.to_string();
        let kind = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(MediaKind::from_extension)?;

        Some(Self {
            name,
            path,
            byte_length,
            kind,
        })
    }

    /// Filename up to its first dot.
    pub fn stem(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }
}
