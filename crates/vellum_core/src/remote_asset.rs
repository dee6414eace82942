//! Assets as reported by the remote library.

use crate::AssetId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An asset known to the remote library.
///
/// Unknown fields in API responses are ignored.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RemoteAsset {
    /// Remote identifier
    id: AssetId,

    /// CDN-addressable filename (a full URL for Storyblok)
    filename: String,

    /// Display name
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    name: Option<String>,

    /// Alt text
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    alt: Option<String>,

    /// Title
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    title: Option<String>,

    /// Focal point hint for cropping
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    focus: Option<String>,

    /// MIME type
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    content_type: Option<String>,
}
