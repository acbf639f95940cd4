//! One-shot (non-watching) rebuild used by the `status` and `layout`
//! subcommands: read every currently watched document once, fold it into a
//! fresh [`GraphStore`], and apply decay — the same algorithm
//! `memcity-ingest`'s graph owner runs per rebuild, without the
//! watcher/debounce machinery around it.

use std::path::{Path, PathBuf};

use chrono::Utc;
use memcity_config::Config;
use memcity_decay::{build_snapshot, HalfLifeTable, SourceWeightTable};
use memcity_extract::Lexicons;
use memcity_graph::GraphStore;
use memcity_ingest::enumerate_watched_paths;
use memcity_layout::RecentDocument;
use memcity_model::Snapshot;

/// Reads every path [`enumerate_watched_paths`] returns under `workspace`,
/// ingests it into a fresh [`GraphStore`], and applies decay at `now`.
/// Unreadable files are logged and skipped, matching the graph owner's
/// "a rebuild never aborts on one bad file" discipline (spec §4.4, §7).
pub fn build_decayed_snapshot(workspace: &Path, config: &Config) -> anyhow::Result<Snapshot> {
    let now = Utc::now();
    let mut store = GraphStore::new();
    let lexicons = Lexicons::from_ticker_lists(&config.ticker_whitelist, &config.ticker_stoplist);

    for path in enumerate_watched_paths(workspace) {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let document = path.to_string_lossy();
                if let Err(error) = store.ingest_document_with_lexicons(&content, &document, now, &lexicons) {
                    tracing::warn!(path = %document, %error, "skipping document");
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read watched file, skipping");
            }
        }
    }

    let raw = store.snapshot(now);
    let half_lives = HalfLifeTable::from_config(config);
    let source_weights = SourceWeightTable::from_config(config);
    build_snapshot(&raw, &half_lives, &source_weights, now).map_err(Into::into)
}

/// The three most-recently-modified watched documents, read whole, for the
/// Layout Projector's active-district heuristic (spec §4.5). Files whose
/// modification time can't be read sort last; a read failure drops that
/// document from the result rather than failing the whole layout run.
#[must_use]
pub fn three_most_recent_documents(workspace: &Path) -> Vec<RecentDocument> {
    let mut paths: Vec<PathBuf> = enumerate_watched_paths(workspace);
    paths.sort_by_key(|p| std::cmp::Reverse(std::fs::metadata(p).and_then(|m| m.modified()).ok()));

    paths
        .into_iter()
        .take(3)
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some(RecentDocument { path: path.to_string_lossy().to_string(), content })
        })
        .collect()
}
