use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A node as it appears in a published snapshot: the raw `Node` fields plus
/// the decay-derived quantities a consumer needs (spec §6's Snapshot frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub mention_count: i64,
    pub first_seen_ms: i64,
    pub last_seen_ms: i64,
    pub sources: Vec<String>,
    pub display_weight: f64,
    pub source_bonus: f64,
    pub decay_factor: f64,
    pub age_ms: i64,
}

/// An edge as it appears in a published snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source_id: String,
    pub target_id: String,
    pub co_occurrence_count: i64,
    pub last_seen_ms: i64,
    pub display_weight: f64,
    pub decay_factor: f64,
}

/// An immutable, deep-copied view of the graph emitted after each rebuild
/// (spec §3, §4.4). Carries a monotonically increasing generation counter
/// so consumers can detect updates and reject stale data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub produced_at_ms: i64,
    pub nodes: Vec<WeightedNode>,
    pub edges: Vec<WeightedEdge>,
}

impl Snapshot {
    #[must_use]
    pub fn new(generation: u64, produced_at: DateTime<Utc>, nodes: Vec<WeightedNode>, edges: Vec<WeightedEdge>) -> Self {
        Self {
            generation,
            produced_at_ms: produced_at.timestamp_millis(),
            nodes,
            edges,
        }
    }

    /// Every edge endpoint must resolve to a node in the same snapshot
    /// (spec §3 invariant). Returns the id of the first dangling endpoint
    /// found, if any.
    #[must_use]
    pub fn dangling_edge_endpoint(&self) -> Option<&str> {
        let ids: std::collections::HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            if !ids.contains(edge.source_id.as_str()) {
                return Some(edge.source_id.as_str());
            }
            if !ids.contains(edge.target_id.as_str()) {
                return Some(edge.target_id.as_str());
            }
        }
        None
    }
}
