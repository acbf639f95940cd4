//! Pure decay and source-weighting functions (spec §4.3): derive a node's or
//! edge's published *display weight* from raw counts, entity type, source
//! provenance, and elapsed wall-clock time. No I/O, no global clock access
//! beyond a caller-supplied `now`.

mod error;
mod half_life;
mod snapshot;
mod source_weight;
mod utils;
mod weight;

pub use error::{DecayError, DecayResult};
pub use half_life::HalfLifeTable;
pub use snapshot::build_snapshot;
pub use source_weight::SourceWeightTable;
pub use utils::{bucket, time_until, WeightBucket};
pub use weight::{edge_weight, freshness, node_weight};
