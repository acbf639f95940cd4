use chrono::{DateTime, Utc};
use memcity_model::{Edge, Node, WeightedEdge, WeightedNode};

use crate::half_life::HalfLifeTable;
use crate::source_weight::SourceWeightTable;

/// `age = now - last_seen`, clamped to >= 0 (spec §4.3).
fn age_days(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = (now - last_seen).num_milliseconds().max(0);
    millis as f64 / 86_400_000.0
}

/// `freshness(last_seen, type) = 2^(-age/H)` (spec §4.3).
#[must_use]
pub fn freshness(last_seen: DateTime<Utc>, half_life_days: f64, now: DateTime<Utc>) -> f64 {
    let age = age_days(last_seen, now);
    2f64.powf(-age / half_life_days)
}

/// Derives a node's published, decayed fields from its raw counts (spec
/// §4.3's node display-weight formula): `display_weight = mention_count *
/// decay * source_bonus`, where `decay = 2^(-age/H)` and `source_bonus` is
/// the max configured source weight across the node's sources.
#[must_use]
pub fn node_weight(
    node: &Node,
    half_lives: &HalfLifeTable,
    source_weights: &SourceWeightTable,
    now: DateTime<Utc>,
) -> WeightedNode {
    let half_life = half_lives.days_for(&node.entity_type);
    let decay_factor = freshness(node.last_seen, half_life, now);
    let source_bonus = source_weights.max_weight(node.sources.iter().map(String::as_str));
    let display_weight = node.mention_count as f64 * decay_factor * source_bonus;

    WeightedNode {
        id: node.id.clone(),
        label: node.label.clone(),
        entity_type: node.entity_type.clone(),
        mention_count: node.mention_count,
        first_seen_ms: node.first_seen.timestamp_millis(),
        last_seen_ms: node.last_seen.timestamp_millis(),
        sources: node.sources.clone(),
        display_weight,
        source_bonus,
        decay_factor,
        age_ms: (now - node.last_seen).num_milliseconds().max(0),
    }
}

/// Derives an edge's published, decayed fields (spec §4.3): same formula as
/// the node case against `co_occurrence_count`, using the default half-life
/// and no source bonus.
#[must_use]
pub fn edge_weight(edge: &Edge, half_lives: &HalfLifeTable, now: DateTime<Utc>) -> WeightedEdge {
    let decay_factor = freshness(edge.last_seen, half_lives.default_days(), now);
    let display_weight = edge.co_occurrence_count as f64 * decay_factor;

    WeightedEdge {
        source_id: edge.source_id.clone(),
        target_id: edge.target_id.clone(),
        co_occurrence_count: edge.co_occurrence_count,
        last_seen_ms: edge.last_seen.timestamp_millis(),
        display_weight,
        decay_factor,
    }
}
