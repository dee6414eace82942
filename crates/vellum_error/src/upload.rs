//! Upload handshake error types.

/// The step of the sign / transfer / finalize handshake that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadStep {
    /// Requesting signed upload credentials
    #[display("sign")]
    Sign,
    /// Posting the file bytes to blob storage
    #[display("transfer")]
    Transfer,
    /// Confirming the upload with the management API
    #[display("finalize")]
    Finalize,
}

/// Failure of one handshake step for one file.
///
/// # Examples
///
/// ```
/// use vellum_error::{UploadError, UploadStep};
///
/// let err = UploadError::new(UploadStep::Transfer, "blob store returned 403");
/// assert_eq!(err.step, UploadStep::Transfer);
/// assert!(format!("{}", err).contains("transfer step failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} step failed: {} at line {} in {}", step, cause, line, file)]
pub struct UploadError {
    /// Handshake step that failed
    pub step: UploadStep,
    /// Human-readable cause
    pub cause: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(step: UploadStep, cause: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            step,
            cause: cause.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
