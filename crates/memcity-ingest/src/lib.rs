//! The Ingestion Supervisor (spec §4.4, §5): watches a memory workspace,
//! debounces filesystem churn, re-extracts and decays the graph, and
//! publishes each rebuilt [`memcity_model::Snapshot`] to a [`SnapshotSink`].

mod debouncer;
mod document_table;
mod error;
mod events;
mod graph_owner;
mod hashing;
mod reader;
mod sink;
mod supervisor;
mod watched_set;
mod watcher;

pub use error::{IngestError, IngestResult};
pub use events::{PathEvent, ReadRequest, RebuildMessage};
pub use sink::{NullSink, SnapshotSink, WatchSink};
pub use supervisor::Supervisor;
pub use watched_set::{enumerate_watched_paths, is_watched_path, FIXED_TOP_LEVEL_FILES, MEMORY_SUBDIR};
