//! Sequential sync run over a media listing.

use crate::decision::is_divergent;
use crate::{Decision, RemoteIndex, decide};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use vellum_core::{
    Checkpoint, FileOutcome, FileReport, LocalFile, PlanEntry, PlannedAction, Registry,
    RegistryEntry, RegistryRecovery, ResolvedAsset, SyncPlan, SyncReport, VellumConfig,
};
use vellum_error::{StorageError, StorageErrorKind, VellumError, VellumErrorKind, VellumResult};
use vellum_remote::{RemoteLibrary, UploadOptions, upload_file};
use vellum_storage::{
    RegistryStore, SnapshotStore, fingerprint_bytes, fingerprint_file, read_media,
};

/// Run-level settings for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Remote folder new uploads are placed in
    pub asset_folder_id: Option<u64>,
    /// Deadline for each handshake step
    pub step_timeout: Duration,
    /// When the registry is persisted
    pub checkpoint: Checkpoint,
    /// Policy for an unparsable registry document
    pub on_corrupt_registry: RegistryRecovery,
}

impl SyncOptions {
    /// Options taken from loaded configuration.
    pub fn from_config(config: &VellumConfig) -> Self {
        Self {
            asset_folder_id: config.sync.asset_folder_id,
            step_timeout: config.remote.step_timeout(),
            checkpoint: config.sync.checkpoint,
            on_corrupt_registry: config.sync.on_corrupt_registry,
        }
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            asset_folder_id: None,
            step_timeout: Duration::from_secs(60),
            checkpoint: Checkpoint::default(),
            on_corrupt_registry: RegistryRecovery::default(),
        }
    }
}

/// Drives a sync run: one remote listing, one registry load, then every file in order.
///
/// Files are processed strictly one after another. A failure local to a file (unreadable
/// bytes, a failed handshake step) is recorded in the report and the run moves on; only
/// setup and persistence failures end the run with an error.
pub struct SyncEngine {
    remote: Arc<dyn RemoteLibrary>,
    registry_store: Arc<dyn RegistryStore>,
    snapshot_store: Arc<dyn SnapshotStore>,
    options: SyncOptions,
    interrupt: Arc<AtomicBool>,
}

impl SyncEngine {
    /// Create an engine over the given remote library and local stores.
    pub fn new(
        remote: Arc<dyn RemoteLibrary>,
        registry_store: Arc<dyn RegistryStore>,
        snapshot_store: Arc<dyn SnapshotStore>,
        options: SyncOptions,
    ) -> Self {
        Self {
            remote,
            registry_store,
            snapshot_store,
            options,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the run before the next file once set.
    ///
    /// Work already done is persisted as usual.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Settings this engine runs with.
    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    async fn load_registry(&self) -> VellumResult<Registry> {
        match self.registry_store.load().await {
            Ok(registry) => Ok(registry),
            Err(e) => match (e.kind(), self.options.on_corrupt_registry) {
                (VellumErrorKind::Registry(registry_err), RegistryRecovery::Reset)
                    if registry_err.is_corrupt() =>
                {
                    warn!(
                        location = %self.registry_store.location(),
                        error = %registry_err,
                        "Registry is unreadable, starting from an empty registry"
                    );
                    Ok(Registry::new())
                }
                _ => Err(e),
            },
        }
    }

    async fn fetch_remote(&self) -> VellumResult<RemoteIndex> {
        let index = RemoteIndex::new(self.remote.list_all().await?);
        info!(count = index.len(), "Found existing assets");
        Ok(index)
    }

    /// Synchronize `files`, in the given order.
    ///
    /// Returns the resolved assets in input order together with a per-file outcome.
    /// The registry is persisted even when some files failed or the run was interrupted.
    /// The snapshot is replaced only by a run that reached every file, so an interrupted
    /// run leaves the previous asset list in place.
    ///
    /// # Errors
    ///
    /// Fails before touching any file if the remote listing cannot be fetched or the
    /// registry cannot be loaded (subject to the corruption policy). Fails afterwards
    /// if the registry or snapshot cannot be written.
    #[instrument(skip(self, files), fields(files = files.len()))]
    pub async fn run(&self, files: &[LocalFile]) -> VellumResult<SyncReport> {
        let remote = self.fetch_remote().await?;
        let mut registry = self.load_registry().await?;
        let mut report = SyncReport::default();

        for file in files {
            if self.interrupt.load(Ordering::SeqCst) {
                warn!(
                    remaining = files.len() - report.files.len(),
                    "Interrupted, stopping before the next file"
                );
                report.interrupted = true;
                break;
            }

            let (outcome, resolved) = self.sync_file(file, &remote, &mut registry).await;
            if matches!(outcome, FileOutcome::Uploaded { .. })
                && self.options.checkpoint == Checkpoint::EachFile
            {
                self.registry_store.save(&mut registry).await?;
            }
            if let Some(resolved) = resolved {
                report.resolved.push(resolved);
            }
            report.files.push(FileReport {
                name: file.name().clone(),
                outcome,
            });
        }

        self.registry_store.save(&mut registry).await?;
        if report.interrupted {
            warn!(
                location = %self.snapshot_store.location(),
                "Run was interrupted, keeping the previous resolved asset list"
            );
        } else {
            self.snapshot_store.save(&report.resolved).await?;
            info!(
                location = %self.snapshot_store.location(),
                "Saved resolved asset list"
            );
        }

        info!(
            uploaded = report.uploaded(),
            skipped = report.skipped(),
            failed = report.failed(),
            total = report.total(),
            interrupted = report.interrupted,
            "Sync complete"
        );
        Ok(report)
    }

    #[instrument(skip(self, file, remote, registry), fields(file = %file.name()))]
    async fn sync_file(
        &self,
        file: &LocalFile,
        remote: &RemoteIndex,
        registry: &mut Registry,
    ) -> (FileOutcome, Option<ResolvedAsset>) {
        let data = match read_media(file.path()).await {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Cannot read file, leaving it out of this run");
                let error = read_failure(e);
                return (FileOutcome::Unreadable { error }, None);
            }
        };
        let fingerprint = fingerprint_bytes(&data);
        debug!(fingerprint = %fingerprint.short(), "Fingerprinted");

        let entry = registry.get(file.name());
        let reason = match decide(entry, &fingerprint, remote) {
            Decision::Skip(asset) => {
                info!(asset_id = %asset.id(), "Unchanged, reusing existing asset");
                let outcome = FileOutcome::Skipped {
                    asset_id: asset.id().clone(),
                };
                return (outcome, Some(ResolvedAsset::from_remote(asset, file.name())));
            }
            Decision::Upload(reason) => reason,
        };

        if is_divergent(remote.find_namesake(file), entry, &fingerprint) {
            warn!(
                "A remote asset with the same name holds different content, uploading a new version"
            );
        }
        info!(reason = %reason, "Uploading");

        let upload_options = UploadOptions {
            asset_folder_id: self.options.asset_folder_id,
            step_timeout: self.options.step_timeout,
        };
        match upload_file(self.remote.as_ref(), file, data, &upload_options).await {
            Ok(asset) => {
                registry.record_upload(
                    file.name().clone(),
                    RegistryEntry {
                        remote_asset_id: asset.id().clone(),
                        fingerprint,
                        remote_filename: asset.filename().clone(),
                        uploaded_at: chrono::Utc::now(),
                    },
                );
                let outcome = FileOutcome::Uploaded {
                    asset_id: asset.id().clone(),
                    reason,
                };
                (outcome, Some(ResolvedAsset::from_remote(&asset, file.name())))
            }
            Err(error) => {
                warn!(
                    step = %error.step,
                    cause = %error.cause,
                    "Upload failed, leaving it out of this run"
                );
                (FileOutcome::Failed { reason, error }, None)
            }
        }
    }

    /// Compute what [`run`](Self::run) would do for `files` without uploading or
    /// writing anything.
    ///
    /// # Errors
    ///
    /// Fails under the same setup conditions as a real run.
    #[instrument(skip(self, files), fields(files = files.len()))]
    pub async fn plan(&self, files: &[LocalFile]) -> VellumResult<SyncPlan> {
        let remote = self.fetch_remote().await?;
        let registry = self.load_registry().await?;
        let mut plan = SyncPlan::default();

        for file in files {
            let fingerprint = match fingerprint_file(file.path()).await {
                Ok(fingerprint) => fingerprint,
                Err(e) => {
                    let error = read_failure(e);
                    plan.entries.push(PlanEntry {
                        name: file.name().clone(),
                        fingerprint: None,
                        action: PlannedAction::Unreadable { error },
                        divergent: false,
                    });
                    continue;
                }
            };

            let entry = registry.get(file.name());
            let (action, divergent) = match decide(entry, &fingerprint, &remote) {
                Decision::Skip(asset) => (
                    PlannedAction::Skip {
                        asset_id: asset.id().clone(),
                    },
                    false,
                ),
                Decision::Upload(reason) => (
                    PlannedAction::Upload { reason },
                    is_divergent(remote.find_namesake(file), entry, &fingerprint),
                ),
            };
            plan.entries.push(PlanEntry {
                name: file.name().clone(),
                fingerprint: Some(fingerprint),
                action,
                divergent,
            });
        }

        info!(
            uploads = plan.uploads(),
            skips = plan.skips(),
            "Planned sync"
        );
        Ok(plan)
    }
}

fn read_failure(e: VellumError) -> StorageError {
    match e.kind() {
        VellumErrorKind::Storage(storage) => storage.clone(),
        other => StorageError::new(StorageErrorKind::FileRead(other.to_string())),
    }
}

impl std::fmt::Debug for SyncEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncEngine")
            .field("registry", &self.registry_store.location())
            .field("snapshot", &self.snapshot_store.location())
            .field("options", &self.options)
            .field("interrupted", &self.interrupt.load(Ordering::SeqCst))
            .finish()
    }
}
