use std::path::PathBuf;

use thiserror::Error;

/// Failures the watcher task can report. Per-file I/O and extraction
/// failures are the *recoverable* class (spec §7) and never reach this
/// type; they are logged and the offending file is skipped for that
/// rebuild instead.
///
/// [`Self::WatchedDirectoryMissing`] is returned from two different call
/// sites with different severities, per spec §7/§4.4: when
/// `Supervisor::start` checks the workspace directory once before spawning
/// anything, a missing directory is the spec's named **Fatal** example
/// ("inability to open the watched directory at startup") and is
/// propagated up to `main` for a non-zero exit. When the same check fails
/// later, inside the background retry loop, it means the directory
/// existed at startup and disappeared afterward — spec §4.4's
/// non-fatal "retries discovery on a 5-second interval" case — and is
/// logged and retried instead of escalated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    #[error("failed to start watching {path}: {source}")]
    WatchSetup { path: PathBuf, source: notify::Error },

    #[error("watched directory {0} does not exist at startup")]
    WatchedDirectoryMissing(PathBuf),

    #[error("an internal supervisor channel closed unexpectedly")]
    ChannelClosed,
}

pub type IngestResult<T> = Result<T, IngestError>;
