//! Remote asset library access for Vellum.
//!
//! The sync engine talks to the remote library through two traits:
//!
//! - [`AssetDirectory`]: a read-only listing of every asset in the space, fetched once
//!   per run and treated as an immutable snapshot
//! - [`AssetUploader`]: the three steps of the signed upload handshake
//!   (sign, transfer, finalize)
//!
//! [`ManagementClient`] implements both against the Storyblok management API, and
//! [`upload_file`] drives the handshake for one file with a deadline on every step.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod handshake;
mod ticket;

pub use client::{ManagementClient, SpaceInfo};
pub use handshake::{UploadOptions, upload_file};
pub use ticket::{SignRequest, SignedUploadTicket};

use vellum_core::{AssetId, LocalFile, RemoteAsset};
use vellum_error::VellumResult;

/// Read access to the assets the remote library already holds.
#[async_trait::async_trait]
pub trait AssetDirectory: Send + Sync {
    /// Every asset in the space.
    ///
    /// # Errors
    ///
    /// Returns a remote error if the listing cannot be fetched. Callers must not
    /// make dedup decisions without it.
    async fn list_all(&self) -> VellumResult<Vec<RemoteAsset>>;
}

/// The sign / transfer / finalize upload protocol.
///
/// Each step can fail independently. [`upload_file`] runs them in order and tags a
/// failure with the step it happened in.
#[async_trait::async_trait]
pub trait AssetUploader: Send + Sync {
    /// Request signed upload credentials for a filename.
    async fn sign(&self, request: &SignRequest) -> VellumResult<SignedUploadTicket>;

    /// Post `data` to blob storage using exactly the ticket's form fields.
    ///
    /// Succeeds only on a no-content response.
    async fn transfer(
        &self,
        ticket: &SignedUploadTicket,
        file: &LocalFile,
        data: Vec<u8>,
    ) -> VellumResult<()>;

    /// Confirm completion and fetch the final asset record.
    async fn finalize(&self, asset_id: &AssetId) -> VellumResult<RemoteAsset>;
}

/// A remote library that can be both listed and uploaded to.
pub trait RemoteLibrary: AssetDirectory + AssetUploader {}

impl<T: AssetDirectory + AssetUploader> RemoteLibrary for T {}
