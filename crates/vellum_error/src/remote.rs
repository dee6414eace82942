//! Remote asset library error types.

/// Kinds of remote API errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RemoteErrorKind {
    /// The remote could not be reached (connection, TLS, timeout)
    #[display("Remote unavailable: {}", _0)]
    Unavailable(String),
    /// The remote answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// The response body did not have the expected shape
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
    /// A URL could not be built from configuration or a ticket
    #[display("Invalid URL: {}", _0)]
    InvalidUrl(String),
}

/// Remote API error with location tracking.
///
/// # Examples
///
/// ```
/// use vellum_error::{RemoteError, RemoteErrorKind};
///
/// let err = RemoteError::new(RemoteErrorKind::Api {
///     status: 401,
///     message: "Unauthorized".to_string(),
/// });
/// assert!(format!("{}", err).contains("401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Remote Error: {} at line {} in {}", kind, line, file)]
pub struct RemoteError {
    /// The kind of error that occurred
    pub kind: RemoteErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RemoteError {
    /// Create a new remote error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RemoteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
