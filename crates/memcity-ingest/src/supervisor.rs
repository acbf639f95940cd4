use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use memcity_config::Config;
use memcity_decay::{HalfLifeTable, SourceWeightTable};
use memcity_extract::Lexicons;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::debouncer::run_debouncer;
use crate::error::{IngestError, IngestResult};
use crate::graph_owner::run_graph_owner;
use crate::reader::run_reader;
use crate::sink::SnapshotSink;
use crate::watcher::run_watcher;

const WATCH_RETRY_INTERVAL: Duration = Duration::from_secs(5);
const CHANNEL_CAPACITY: usize = 256;

/// Owns the four spec §5 tasks (watcher, debouncer, reader, graph owner) and
/// the root cancellation signal that tears them down.
///
/// The four tasks are chained through plain `mpsc` channels in a straight
/// line: watcher -> debouncer -> reader -> graph owner. Cancelling only the
/// watcher is enough to shut the whole pipeline down in the spec's "LIFO"
/// order: the watcher exits and drops its sender, which closes the
/// debouncer's channel once its in-flight timers finish; the debouncer
/// dropping its own sender closes the reader's channel; the reader dropping
/// its sender closes the graph owner's channel, and the graph owner exits
/// only after it has drained (and published) every message already in
/// flight. No task downstream of the watcher ever observes the
/// cancellation token directly.
pub struct Supervisor {
    cancellation: CancellationToken,
    handle: tokio::task::JoinHandle<()>,
}

impl Supervisor {
    /// Spawns the pipeline against `workspace`, publishing every rebuilt
    /// snapshot to `sink`. Performs spec §4.4's startup step itself (the
    /// reader task enumerates and reads the watched set once before
    /// entering its event-driven loop, emitting the first snapshot).
    ///
    /// Checks that `workspace` exists *before* spawning anything: per spec
    /// §7's Fatal error class ("inability to open the watched directory at
    /// startup... terminate the process... after one final diagnostic log
    /// line"), a missing directory at this point is not retried — it is
    /// logged once and returned as an error for the caller to propagate to
    /// a non-zero process exit. Once the pipeline is running, a directory
    /// that disappears *later* is the separate, non-fatal case spec §4.4
    /// describes ("the supervisor retains the last published snapshot and
    /// retries discovery on a 5-second interval"), handled inside
    /// [`run_watcher_with_retry`].
    pub async fn start(workspace: PathBuf, config: &Config, sink: Arc<dyn SnapshotSink>) -> IngestResult<Self> {
        if !workspace.is_dir() {
            tracing::error!(path = %workspace.display(), "watched directory does not exist at startup, exiting");
            return Err(IngestError::WatchedDirectoryMissing(workspace));
        }

        let cancellation = CancellationToken::new();

        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (request_tx, request_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (rebuild_tx, rebuild_rx) = mpsc::channel(CHANNEL_CAPACITY);

        let debounce = Duration::from_millis(config.debounce_ms);
        let rebuild_on_delete = config.rebuild_on_delete;
        let half_lives = HalfLifeTable::from_config(config);
        let source_weights = SourceWeightTable::from_config(config);
        let lexicons = Lexicons::from_ticker_lists(&config.ticker_whitelist, &config.ticker_stoplist);

        tokio::spawn(run_debouncer(event_rx, request_tx, debounce));
        tokio::spawn(run_reader(workspace.clone(), request_rx, rebuild_tx, rebuild_on_delete));
        tokio::spawn(run_graph_owner(rebuild_rx, sink, half_lives, source_weights, lexicons));

        let watcher_cancellation = cancellation.clone();
        let handle = tokio::spawn(run_watcher_with_retry(workspace, event_tx, watcher_cancellation));

        Ok(Self { cancellation, handle })
    }

    /// Cancels the root signal and waits for the watcher task to observe it
    /// and return; the rest of the pipeline drains on its own as described
    /// on [`Supervisor`].
    pub async fn shutdown(self) {
        self.cancellation.cancel();
        let _ = self.handle.await;
    }
}

/// Keeps calling [`run_watcher`] until it succeeds or `cancellation` fires,
/// sleeping [`WATCH_RETRY_INTERVAL`] between a failure and the next
/// attempt. Only reached after [`Supervisor::start`]'s own synchronous
/// startup check has already confirmed the directory exists, so every
/// failure seen here — including a `WatchedDirectoryMissing` from a
/// directory removed after that check — is spec §4.4's non-fatal "retries
/// discovery on a 5-second interval" case, never the fatal startup one. A
/// watch-setup failure other than a missing directory (e.g. an OS resource
/// limit) is retried the same way, since the supervisor has no narrower
/// way to distinguish "will never recover" from "transient."
async fn run_watcher_with_retry(
    workspace: PathBuf,
    tx: mpsc::Sender<crate::events::PathEvent>,
    cancellation: CancellationToken,
) {
    loop {
        tokio::select! {
            () = cancellation.cancelled() => return,
            result = run_watcher(workspace.clone(), tx.clone(), cancellation.clone()) => {
                match result {
                    Ok(()) => return,
                    Err(error) => {
                        tracing::warn!(%error, "watcher setup failed, retrying");
                        tokio::select! {
                            () = cancellation.cancelled() => return,
                            () = tokio::time::sleep(WATCH_RETRY_INTERVAL) => {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    use crate::sink::WatchSink;

    #[tokio::test]
    async fn startup_emits_a_snapshot_from_preexisting_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("SOUL.md"), "Anton decided to adopt `docker`.").unwrap();

        let (sink, mut rx) = WatchSink::new();
        let supervisor = Supervisor::start(dir.path().to_path_buf(), &Config::defaults(), Arc::new(sink))
            .await
            .unwrap();

        rx.changed().await.unwrap();
        let snapshot = rx.borrow().clone().unwrap();
        assert!(!snapshot.nodes.is_empty());

        supervisor.shutdown().await;
    }

    #[tokio::test]
    async fn a_later_file_write_triggers_a_second_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SOUL.md");
        std::fs::write(&path, "Anton decided to adopt `docker`.").unwrap();

        let (sink, mut rx) = WatchSink::new();
        let supervisor = Supervisor::start(
            dir.path().to_path_buf(),
            &Config { debounce_ms: 20, ..Config::defaults() },
            Arc::new(sink),
        )
        .await
        .unwrap();

        rx.changed().await.unwrap();
        let first = rx.borrow().clone().unwrap();
        assert_eq!(first.generation, 1);

        std::fs::write(&path, "Anton decided to adopt `docker` and `kubernetes`.").unwrap();
        tokio::time::timeout(StdDuration::from_secs(5), rx.changed()).await.unwrap().unwrap();
        let second = rx.borrow().clone().unwrap();
        assert_eq!(second.generation, 2);

        supervisor.shutdown().await;
    }

    #[tokio::test]
    async fn start_fails_fatally_when_the_workspace_directory_is_missing_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-yet-created");

        let (sink, _rx) = WatchSink::new();
        let result =
            Supervisor::start(missing.clone(), &Config { debounce_ms: 20, ..Config::defaults() }, Arc::new(sink))
                .await;

        assert!(matches!(result, Err(IngestError::WatchedDirectoryMissing(path)) if path == missing));
    }

    #[tokio::test]
    async fn a_directory_removed_after_startup_is_retried_not_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let (sink, _rx) = WatchSink::new();
        let supervisor = Supervisor::start(
            dir.path().to_path_buf(),
            &Config { debounce_ms: 20, ..Config::defaults() },
            Arc::new(sink),
        )
        .await
        .expect("the directory exists at startup, so this must succeed");

        // The directory disappearing later is spec §4.4's non-fatal retry
        // case, not the fatal startup one: the watcher keeps retrying in the
        // background rather than the pipeline aborting, and shutdown still
        // completes promptly.
        drop(dir);
        tokio::time::sleep(StdDuration::from_millis(50)).await;
        let result = tokio::time::timeout(StdDuration::from_secs(2), supervisor.shutdown()).await;
        assert!(result.is_ok());
    }
}
