use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use memcity_model::WeightedEdge;

/// A pruned, classified co-occurrence edge (spec §4.5 / §6's `connections`
/// frame entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub strength: f64,
    pub count: i64,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    Local,
    Bridge,
}

/// Selects and classifies connections (spec §4.5): keep edges with
/// `count >= 2` or `normalized strength > 0.3` (strength normalized by the
/// maximum display weight across all edges), cap at the top `max_connections`
/// by strength, then classify each as local (same district on both ends) or
/// bridge.
#[must_use]
pub fn select_connections(
    edges: &[WeightedEdge],
    assignment: &FxHashMap<String, String>,
    max_connections: usize,
) -> Vec<Connection> {
    let max_weight = edges.iter().map(|e| e.display_weight).fold(0.0f64, f64::max);

    let mut candidates: Vec<Connection> = edges
        .iter()
        .filter_map(|e| {
            let strength = if max_weight > 0.0 { e.display_weight / max_weight } else { 0.0 };
            if e.co_occurrence_count < 2 && strength <= 0.3 {
                return None;
            }
            let same_district = match (assignment.get(&e.source_id), assignment.get(&e.target_id)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            };
            Some(Connection {
                from: e.source_id.clone(),
                to: e.target_id.clone(),
                strength,
                count: e.co_occurrence_count,
                kind: if same_district { ConnectionKind::Local } else { ConnectionKind::Bridge },
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    candidates.truncate(max_connections);
    candidates
}
