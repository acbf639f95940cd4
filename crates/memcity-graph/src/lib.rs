//! In-memory entity graph store: node/edge upsert, additive merge, raw
//! snapshotting, and key-node scoring, built on the extractor's paragraph
//! groups (spec §4.2).

mod error;
mod store;

pub use error::{GraphError, GraphResult};
pub use store::{GraphStore, RawSnapshot};
