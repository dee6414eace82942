//! Driver for the three-step upload handshake.

use crate::{AssetUploader, SignRequest};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, instrument};
use vellum_core::{LocalFile, RemoteAsset};
use vellum_error::{UploadError, UploadStep, VellumResult};

/// Per-upload settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOptions {
    /// Remote folder for the new asset
    pub asset_folder_id: Option<u64>,
    /// Deadline applied to each step separately
    pub step_timeout: Duration,
}

async fn run_step<T>(
    step: UploadStep,
    deadline: Duration,
    operation: impl Future<Output = VellumResult<T>>,
) -> Result<T, UploadError> {
    match tokio::time::timeout(deadline, operation).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(UploadError::new(step, e.to_string())),
        Err(_) => Err(UploadError::new(
            step,
            format!("deadline of {:?} elapsed", deadline),
        )),
    }
}

/// Upload one local file: sign, transfer `data`, finalize.
///
/// `data` is the content the caller fingerprinted; the file is not read again. Any
/// failure aborts this file only and is reported with the step it occurred in.
///
/// # Errors
///
/// Returns [`UploadError`] naming the failing step.
#[instrument(skip(uploader, file, data, options), fields(file = %file.name(), size = data.len()))]
pub async fn upload_file<U: AssetUploader + ?Sized>(
    uploader: &U,
    file: &LocalFile,
    data: Vec<u8>,
    options: &UploadOptions,
) -> Result<RemoteAsset, UploadError> {
    let deadline = options.step_timeout;

    let request = SignRequest::new(file.name().clone(), options.asset_folder_id);
    let ticket = run_step(UploadStep::Sign, deadline, uploader.sign(&request)).await?;
    debug!(asset_id = %ticket.asset_id(), "Got signed upload ticket");

    run_step(
        UploadStep::Transfer,
        deadline,
        uploader.transfer(&ticket, file, data),
    )
    .await?;
    debug!("Transferred file to blob storage");

    let asset = run_step(
        UploadStep::Finalize,
        deadline,
        uploader.finalize(ticket.asset_id()),
    )
    .await?;

    info!(asset_id = %asset.id(), url = %asset.filename(), "Upload complete");
    Ok(asset)
}
