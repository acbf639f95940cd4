use std::path::PathBuf;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::{IngestError, IngestResult};
use crate::events::PathEvent;
use crate::watched_set::is_watched_path;

/// Translates native filesystem notifications into [`PathEvent`]s for every
/// path under `workspace` that falls inside the watched surface (spec
/// §4.4, §5's watcher task), forwarding them to `tx` until `cancellation`
/// fires. The `notify` callback runs on its own background thread, so a
/// blocking send from it never stalls a tokio worker.
pub async fn run_watcher(
    workspace: PathBuf,
    tx: mpsc::Sender<PathEvent>,
    cancellation: CancellationToken,
) -> IngestResult<()> {
    if !workspace.is_dir() {
        return Err(IngestError::WatchedDirectoryMissing(workspace));
    }

    let callback_workspace = workspace.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            let Ok(event) = res else { return };
            let kind_is_remove = matches!(event.kind, EventKind::Remove(_));
            for path in event.paths.iter().cloned() {
                if !is_watched_path(&path, &callback_workspace) {
                    continue;
                }
                let path_event =
                    if kind_is_remove { PathEvent::Removed(path) } else { PathEvent::Changed(path) };
                let _ = tx.blocking_send(path_event);
            }
        },
        notify::Config::default(),
    )
    .map_err(|source| IngestError::WatchSetup { path: workspace.clone(), source })?;

    watcher
        .watch(&workspace, RecursiveMode::Recursive)
        .map_err(|source| IngestError::WatchSetup { path: workspace.clone(), source })?;

    cancellation.cancelled().await;
    drop(watcher);
    Ok(())
}
