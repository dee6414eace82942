//! Signed upload request and ticket types.

use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeMap;
use vellum_core::AssetId;

/// Body of the sign request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignRequest {
    /// Target filename
    pub filename: String,
    /// Ask the remote to validate the upload on finalize
    pub validate_upload: u8,
    /// Destination folder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_folder_id: Option<u64>,
}

impl SignRequest {
    /// Sign request for `filename`, optionally placed in a folder.
    pub fn new(filename: impl Into<String>, asset_folder_id: Option<u64>) -> Self {
        Self {
            filename: filename.into(),
            validate_upload: 1,
            asset_folder_id,
        }
    }
}

/// Credentials for one blob-store upload.
///
/// Opaque to the sync engine; only the uploader that issued it interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SignedUploadTicket {
    /// Provisional asset identifier, confirmed by finalize
    asset_id: AssetId,
    /// Blob store endpoint the multipart form is posted to
    post_url: String,
    /// Form fields the blob store requires, sent verbatim
    fields: BTreeMap<String, String>,
}

impl SignedUploadTicket {
    /// Assemble a ticket.
    pub fn new(
        asset_id: AssetId,
        post_url: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) -> Self {
        Self {
            asset_id,
            post_url: post_url.into(),
            fields,
        }
    }
}
