//! Asset registry error types.

/// Kinds of registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RegistryErrorKind {
    /// The persisted registry document is not in the expected shape
    #[display("Corrupt registry document {}: {}", path, reason)]
    Corrupt {
        /// Location of the document
        path: String,
        /// Parser message
        reason: String,
    },
    /// The in-memory registry could not be serialized
    #[display("Failed to serialize registry: {}", _0)]
    Serialize(String),
}

/// Registry error with location tracking.
///
/// # Examples
///
/// ```
/// use vellum_error::{RegistryError, RegistryErrorKind};
///
/// let err = RegistryError::new(RegistryErrorKind::Corrupt {
///     path: "data/asset-registry.json".to_string(),
///     reason: "expected value at line 1 column 1".to_string(),
/// });
/// assert!(err.is_corrupt());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Registry Error: {} at line {} in {}", kind, line, file)]
pub struct RegistryError {
    /// The kind of error that occurred
    pub kind: RegistryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RegistryError {
    /// Create a new registry error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RegistryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the persisted document failed to parse.
    pub fn is_corrupt(&self) -> bool {
        matches!(self.kind, RegistryErrorKind::Corrupt { .. })
    }
}
