use std::collections::HashSet;

use memcity_graph::RawSnapshot;
use memcity_model::Snapshot;

use crate::error::{DecayError, DecayResult};
use crate::half_life::HalfLifeTable;
use crate::source_weight::SourceWeightTable;
use crate::weight::{edge_weight, node_weight};
use chrono::{DateTime, Utc};

/// Applies decay and source weighting to every node and edge in `raw`,
/// producing the published [`Snapshot`] (spec §4.4: "the decay step is
/// applied at snapshot time using the current wall clock"). Re-checks the
/// invariants of `spec.md` §3 before returning, per §4.4's "invariants are
/// re-checked before publication" and §7's "upstream consumers never observe
/// partial snapshots."
pub fn build_snapshot(
    raw: &RawSnapshot,
    half_lives: &HalfLifeTable,
    source_weights: &SourceWeightTable,
    now: DateTime<Utc>,
) -> DecayResult<Snapshot> {
    for node in &raw.nodes {
        node.validate()?;
    }

    let node_ids: HashSet<&str> = raw.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &raw.edges {
        if !node_ids.contains(edge.source_id.as_str()) || !node_ids.contains(edge.target_id.as_str()) {
            return Err(DecayError::DanglingEdgeEndpoint {
                source_id: edge.source_id.clone(),
                target_id: edge.target_id.clone(),
            });
        }
    }

    let nodes = raw
        .nodes
        .iter()
        .map(|n| node_weight(n, half_lives, source_weights, now))
        .collect();
    let edges = raw
        .edges
        .iter()
        .map(|e| edge_weight(e, half_lives, now))
        .collect();

    Ok(Snapshot::new(raw.generation, now, nodes, edges))
}
