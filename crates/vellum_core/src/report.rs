//! Per-file outcomes and run summaries.

use crate::{AssetId, ContentFingerprint, ResolvedAsset};
use vellum_error::{StorageError, UploadError};

/// Why a file goes through the upload handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadReason {
    /// No registry entry for this filename
    #[display("untracked")]
    Untracked,
    /// Registry fingerprint differs from the file's current content
    #[display("content changed")]
    ContentChanged,
    /// Fingerprint matches but the remote asset is gone
    #[display("remote asset missing")]
    RemoteMissing,
}

/// What happened to one local file during a run.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// Unchanged and still present remotely
    Skipped {
        /// Existing remote asset
        asset_id: AssetId,
    },
    /// Uploaded through the handshake
    Uploaded {
        /// New remote asset
        asset_id: AssetId,
        /// Why the upload happened
        reason: UploadReason,
    },
    /// The handshake failed; the registry entry was left as it was
    Failed {
        /// Why the upload was attempted
        reason: UploadReason,
        /// Failing step and cause
        error: UploadError,
    },
    /// The file could not be read for hashing
    Unreadable {
        /// Read failure
        error: StorageError,
    },
}

/// Outcome for a named file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Local filename
    pub name: String,
    /// What happened
    pub outcome: FileOutcome,
}

/// Result of a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Published assets in input order
    pub resolved: Vec<ResolvedAsset>,
    /// One report per processed file, in input order
    pub files: Vec<FileReport>,
    /// Whether the run stopped early on an interrupt
    pub interrupted: bool,
}

impl SyncReport {
    /// Files uploaded this run.
    pub fn uploaded(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Uploaded { .. }))
    }

    /// Files resolved without a network write.
    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Skipped { .. }))
    }

    /// Files omitted from the output because of an upload or read failure.
    pub fn failed(&self) -> usize {
        self.count(|outcome| {
            matches!(
                outcome,
                FileOutcome::Failed { .. } | FileOutcome::Unreadable { .. }
            )
        })
    }

    /// Assets available after the run.
    pub fn total(&self) -> usize {
        self.resolved.len()
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|file| predicate(&file.outcome)).count()
    }
}

/// Decision a dry run would take for one file.
#[derive(Debug, Clone)]
pub enum PlannedAction {
    /// Would resolve from the existing remote asset
    Skip {
        /// Existing remote asset
        asset_id: AssetId,
    },
    /// Would upload
    Upload {
        /// Why
        reason: UploadReason,
    },
    /// Could not be hashed
    Unreadable {
        /// Read failure
        error: StorageError,
    },
}

/// Planned action for a named file.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    /// Local filename
    pub name: String,
    /// Current fingerprint, when the file was readable
    pub fingerprint: Option<ContentFingerprint>,
    /// Planned action
    pub action: PlannedAction,
    /// A remote asset shares this file's name but the content differs
    pub divergent: bool,
}

/// Result of a dry run.
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    /// One entry per local file, in input order
    pub entries: Vec<PlanEntry>,
}

impl SyncPlan {
    /// Files a real run would upload.
    pub fn uploads(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.action, PlannedAction::Upload { .. }))
            .count()
    }

    /// Files a real run would skip.
    pub fn skips(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.action, PlannedAction::Skip { .. }))
            .count()
    }
}
