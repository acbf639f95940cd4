use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::document_table::DocumentTable;
use crate::events::{ReadRequest, RebuildMessage};
use crate::hashing::content_hash;
use crate::watched_set::enumerate_watched_paths;

/// Performs every blocking file read for the supervisor (spec §5's reader
/// task): per-path hash checks to discard no-op events, and the full
/// re-read of the watched set once a rebuild is actually warranted. Owns
/// the [`DocumentTable`] (spec §3's ownership rule), since it's the only
/// task that ever touches file contents.
///
/// Recoverable I/O failures (spec §7 class 1) are logged and the offending
/// file is simply absent from the rebuild's document list; they never
/// reach the graph owner as an error.
pub async fn run_reader(
    workspace: PathBuf,
    mut rx: mpsc::Receiver<ReadRequest>,
    owner_tx: mpsc::Sender<RebuildMessage>,
    rebuild_on_delete: bool,
) {
    let mut documents = DocumentTable::new();

    let startup_now = chrono::Utc::now();
    let mut startup_documents = Vec::new();
    for path in enumerate_watched_paths(&workspace) {
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                documents.upsert(path.clone(), content_hash(&bytes), startup_now);
                match String::from_utf8(bytes) {
                    Ok(content) => startup_documents.push((path, content)),
                    Err(error) => tracing::warn!(path = %path.display(), %error, "non-UTF-8 file, skipping"),
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read file at startup, skipping");
            }
        }
    }
    if owner_tx.send(RebuildMessage { documents: startup_documents }).await.is_err() {
        return;
    }

    while let Some(request) = rx.recv().await {
        let now = chrono::Utc::now();
        let stale = if request.removed {
            documents.remove(&request.path);
            rebuild_on_delete
        } else {
            match tokio::fs::read(&request.path).await {
                Ok(bytes) => documents.upsert(request.path.clone(), content_hash(&bytes), now),
                Err(error) => {
                    tracing::warn!(path = %request.path.display(), %error, "failed to read changed file, skipping");
                    false
                }
            }
        };

        if !stale {
            continue;
        }

        let rebuilt = read_watched_documents(&workspace).await;
        if owner_tx.send(RebuildMessage { documents: rebuilt }).await.is_err() {
            break;
        }
    }
}

/// Re-enumerates the watched set and reads every file's content fresh
/// (spec §4.4's rebuild discipline: "re-extract every currently watched
/// document"). A file that fails to read is logged and omitted; the rest
/// of the rebuild still proceeds (spec §7 class 1).
async fn read_watched_documents(workspace: &std::path::Path) -> Vec<(PathBuf, String)> {
    let mut documents = Vec::new();
    for path in enumerate_watched_paths(workspace) {
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => documents.push((path, content)),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read file during rebuild, skipping");
            }
        }
    }
    documents
}
