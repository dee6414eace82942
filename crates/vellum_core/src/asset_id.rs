//! Opaque remote asset identifiers.

use serde::{Deserialize, Serialize};

/// Identifier assigned to an asset by the remote library.
///
/// The management API issues integers, but nothing in Vellum relies on that. Whichever
/// form is received is kept, so registry documents round-trip unchanged.
///
/// # Examples
///
/// ```
/// use vellum_core::AssetId;
///
/// let id: AssetId = serde_json::from_str("123456").unwrap();
/// assert_eq!(id, AssetId::from(123456u64));
/// assert_eq!(id.to_string(), "123456");
/// assert_eq!(serde_json::to_string(&id).unwrap(), "123456");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(untagged)]
pub enum AssetId {
    /// Integer identifier
    #[display("{}", _0)]
    Numeric(u64),
    /// Any other identifier
    #[display("{}", _0)]
    Text(String),
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        AssetId::Text(value.to_string())
    }
}
