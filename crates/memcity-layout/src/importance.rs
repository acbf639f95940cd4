use rustc_hash::FxHashMap;

use memcity_model::WeightedNode;

/// `importance(node) = mention_count × (0.5 + freshness) × source_bonus`
/// (spec §4.5). The snapshot's `decay_factor` already *is* this spec's
/// `freshness`, and `source_bonus` is already attached by the decay stage,
/// so this reads straight off the published [`WeightedNode`] fields without
/// recomputing decay.
#[must_use]
pub fn importance(node: &WeightedNode) -> f64 {
    node.mention_count as f64 * (0.5 + node.decay_factor) * node.source_bonus
}

/// Normalizes every node's raw importance by the maximum importance in the
/// snapshot to obtain `î ∈ [0, 1]` (spec §4.5). A snapshot with zero total
/// importance (e.g. every node has mention_count 0, which cannot happen per
/// the model invariants, or an empty snapshot) maps every node to 0.
#[must_use]
pub fn normalized_importances(nodes: &[WeightedNode]) -> FxHashMap<String, f64> {
    let raw: FxHashMap<String, f64> = nodes.iter().map(|n| (n.id.clone(), importance(n))).collect();
    let max = raw.values().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        return raw.into_keys().map(|id| (id, 0.0)).collect();
    }
    raw.into_iter().map(|(id, v)| (id, v / max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, mention_count: i64, decay_factor: f64, source_bonus: f64) -> WeightedNode {
        WeightedNode {
            id: id.to_string(),
            label: id.to_string(),
            entity_type: "tool".to_string(),
            mention_count,
            first_seen_ms: 0,
            last_seen_ms: 0,
            sources: vec!["memory/a.md".to_string()],
            display_weight: 0.0,
            source_bonus,
            decay_factor,
            age_ms: 0,
        }
    }

    #[test]
    fn importance_combines_mentions_freshness_and_source_bonus() {
        let n = node("tool:docker", 4, 0.5, 2.0);
        assert!((importance(&n) - (4.0 * 1.0 * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn normalized_importances_scales_to_unit_max() {
        let nodes = vec![node("tool:docker", 4, 1.0, 1.0), node("tool:redis", 2, 1.0, 1.0)];
        let normalized = normalized_importances(&nodes);
        assert!((normalized[&nodes[0].id.clone()] - 1.0).abs() < 1e-9);
        assert!((normalized[&nodes[1].id.clone()] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn normalized_importances_handles_empty_snapshot() {
        let normalized = normalized_importances(&[]);
        assert!(normalized.is_empty());
    }
}
