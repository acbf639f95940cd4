use crate::ids::{edge_endpoints, edge_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An undirected co-occurrence edge between two nodes that appeared in the
/// same paragraph of the same document at least once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub co_occurrence_count: i64,
    pub last_seen: DateTime<Utc>,
}

impl Edge {
    /// Create a freshly-observed edge between `a` and `b` (order does not
    /// matter; the canonical id and `source_id <= target_id` ordering are
    /// derived here).
    #[must_use]
    pub fn new(a: &str, b: &str, now: DateTime<Utc>) -> Self {
        let id = edge_id(a, b);
        let (source_id, target_id) = edge_endpoints(&id).expect("edge_id always contains '|'");
        Self {
            id,
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            co_occurrence_count: 1,
            last_seen: now,
        }
    }

    /// Record another co-occurrence.
    pub fn record_occurrence(&mut self, now: DateTime<Utc>) {
        self.co_occurrence_count += 1;
        if now > self.last_seen {
            self.last_seen = now;
        }
    }

    /// Additive merge used by `GraphStore::merge`: counts sum, `last_seen`
    /// takes the later.
    pub fn merge_from(&mut self, other: &Edge) {
        self.co_occurrence_count += other.co_occurrence_count;
        if other.last_seen > self.last_seen {
            self.last_seen = other.last_seen;
        }
    }
}
