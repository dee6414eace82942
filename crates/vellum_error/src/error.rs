//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, RegistryError, RemoteError, StorageError, UploadError};

/// Every error condition the Vellum crates can raise.
///
/// # Examples
///
/// ```
/// use vellum_error::{VellumError, UploadError, UploadStep};
///
/// let err: VellumError = UploadError::new(UploadStep::Sign, "quota exceeded").into();
/// assert!(format!("{}", err).contains("Upload Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VellumErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Local filesystem error
    #[from(StorageError)]
    Storage(StorageError),
    /// Registry document error
    #[from(RegistryError)]
    Registry(RegistryError),
    /// Remote asset library error
    #[from(RemoteError)]
    Remote(RemoteError),
    /// Upload handshake error
    #[from(UploadError)]
    Upload(UploadError),
}

/// Vellum error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vellum_error::{ConfigError, VellumErrorKind, VellumResult};
///
/// fn might_fail() -> VellumResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), VellumErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vellum Error: {}", _0)]
pub struct VellumError(Box<VellumErrorKind>);

impl VellumError {
    /// Create a new error from a kind.
    pub fn new(kind: VellumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VellumErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VellumErrorKind
impl<T> From<T> for VellumError
where
    T: Into<VellumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vellum operations.
pub type VellumResult<T> = std::result::Result<T, VellumError>;
