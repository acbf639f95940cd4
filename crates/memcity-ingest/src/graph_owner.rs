use std::sync::Arc;

use chrono::Utc;
use memcity_decay::{build_snapshot, HalfLifeTable, SourceWeightTable};
use memcity_extract::Lexicons;
use memcity_graph::GraphStore;
use tokio::sync::mpsc;

use crate::events::RebuildMessage;
use crate::sink::SnapshotSink;

/// The sole mutator of the Graph Store (spec §5): on every
/// `"full rebuild with these documents"` message, starts a fresh, empty
/// store, re-extracts every document, applies decay, and publishes the
/// result. Never panics; a rebuild that fails on one document simply omits
/// that document's contribution to the graph rather than aborting the
/// whole rebuild (spec §4.4's "a rebuild never panics").
///
/// The generation counter lives here rather than inside [`GraphStore`],
/// because a fresh store is constructed every rebuild (per the full-rebuild
/// discipline) and would otherwise restart its own internal counter each
/// time; `generation` instead tracks rebuilds across the store's entire
/// lifetime, satisfying spec §3's "monotonically increasing" requirement.
pub async fn run_graph_owner(
    mut rx: mpsc::Receiver<RebuildMessage>,
    sink: Arc<dyn SnapshotSink>,
    half_lives: HalfLifeTable,
    source_weights: SourceWeightTable,
    lexicons: Lexicons,
) {
    let mut generation: u64 = 0;

    while let Some(message) = rx.recv().await {
        generation += 1;
        let now = Utc::now();
        let mut store = GraphStore::new();

        for (path, content) in &message.documents {
            let document = path.to_string_lossy();
            if let Err(error) = store.ingest_document_with_lexicons(content, &document, now, &lexicons) {
                tracing::warn!(path = %document, %error, "skipping document during rebuild");
            }
        }

        let mut raw = store.snapshot(now);
        raw.generation = generation;

        match build_snapshot(&raw, &half_lives, &source_weights, now) {
            Ok(snapshot) => sink.publish(snapshot),
            Err(error) => {
                tracing::error!(%error, "rebuilt graph failed its own invariants, snapshot withheld");
            }
        }
    }

    tracing::debug!("graph owner exiting after final rebuild message");
}
