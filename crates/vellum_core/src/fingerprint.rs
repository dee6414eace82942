//! Content fingerprints.

use serde::{Deserialize, Serialize};

/// Lowercase hex SHA-256 digest of a file's full content.
///
/// Identical bytes always produce identical fingerprints. Fingerprints are computed
/// fresh on every run and only persisted inside registry entries.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    /// Wrap an already computed hex digest.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The full hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading twelve characters, for log lines.
    pub fn short(&self) -> &str {
        let end = self.0.len().min(12);
        &self.0[..end]
    }
}
