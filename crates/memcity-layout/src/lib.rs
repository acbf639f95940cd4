//! Layout Projector: a pure, deterministic force-directed simulation that
//! turns a decayed graph snapshot into city-layout buildings, district
//! bounds, and a pruned connection set.

mod active_district;
mod config;
mod connections;
mod district;
mod district_bounds;
mod error;
mod force;
mod hashing;
mod importance;
mod placement;
mod result;
mod sizing;

pub use active_district::{score_active_district, RecentDocument};
pub use config::LayoutConfig;
pub use connections::{select_connections, Connection, ConnectionKind};
pub use district::{assign_district, polar_angle};
pub use district_bounds::{compute_district_bounds, DistrictBound};
pub use error::{LayoutError, LayoutResult};
pub use force::{simulate, NodeSimContext};
pub use importance::{importance, normalized_importances};
pub use placement::{initial_placement, Particle};
pub use result::{LayoutFrame, ALGORITHM};
pub use sizing::{building_footprint, building_height, top_weighted_source_pattern};

use rustc_hash::FxHashMap;

use memcity_model::{Building, Snapshot};

/// Runs the full layout pipeline (spec §4.5): district assignment,
/// importance normalization, hash-seeded initial placement, the
/// fixed-iteration force simulation, district bounds, building sizing,
/// connection selection, and the active-district heuristic.
///
/// Deterministic: identical `snapshot`, `recent_documents`, and `config`
/// always produce bit-identical output, since every source of randomness
/// (jitter, initial velocity) is a pure hash of the node id.
pub fn project(
    snapshot: &Snapshot,
    recent_documents: &[RecentDocument],
    config: &LayoutConfig,
) -> LayoutResult<LayoutFrame> {
    let node_ids: std::collections::HashSet<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &snapshot.edges {
        if !node_ids.contains(edge.source_id.as_str()) {
            return Err(LayoutError::DanglingEdgeEndpoint(edge.source_id.clone()));
        }
        if !node_ids.contains(edge.target_id.as_str()) {
            return Err(LayoutError::DanglingEdgeEndpoint(edge.target_id.clone()));
        }
    }

    let district_base: FxHashMap<&str, (f64, f64)> =
        config.districts.districts.iter().map(|d| (d.name.as_str(), (d.base_x, d.base_z))).collect();

    let assignment: FxHashMap<String, String> = snapshot
        .nodes
        .iter()
        .map(|n| (n.id.clone(), assign_district(&n.label, &config.districts).to_string()))
        .collect();

    let normalized = normalized_importances(&snapshot.nodes);
    let ids: Vec<String> = snapshot.nodes.iter().map(|n| n.id.clone()).collect();

    let particles: Vec<Particle> = snapshot
        .nodes
        .iter()
        .map(|n| {
            let base = assignment.get(&n.id).and_then(|d| district_base.get(d.as_str())).copied().unwrap_or((0.0, 0.0));
            initial_placement(&n.id, normalized[&n.id], base)
        })
        .collect();

    let contexts: FxHashMap<String, NodeSimContext> = snapshot
        .nodes
        .iter()
        .map(|n| {
            let base = assignment.get(&n.id).and_then(|d| district_base.get(d.as_str())).copied().unwrap_or((0.0, 0.0));
            (n.id.clone(), NodeSimContext { normalized_importance: normalized[&n.id], district_base: base })
        })
        .collect();

    let settled = simulate(&ids, particles, &contexts, &snapshot.edges, config.iterations, config.bounds);
    let positions: FxHashMap<String, Particle> = ids.iter().cloned().zip(settled.iter().copied()).collect();

    let top_source = top_weighted_source_pattern(&config.source_weights_by_pattern);

    let buildings: Vec<Building> = snapshot
        .nodes
        .iter()
        .map(|n| {
            let ni = normalized[&n.id];
            let p = positions[&n.id];
            let height = building_height(n, ni, top_source);
            Building {
                id: n.id.clone(),
                entity_type: n.entity_type.clone(),
                label: n.label.clone(),
                district: assignment[&n.id].clone(),
                x: p.x,
                z: p.z,
                height,
                width: building_footprint(height),
                depth: building_footprint(height),
                importance: ni,
                frequency: n.mention_count,
                recency_score: n.decay_factor,
                source_score: n.source_bonus,
                sources: n.sources.clone(),
            }
        })
        .collect();

    let freshness_of: FxHashMap<String, f64> = snapshot.nodes.iter().map(|n| (n.id.clone(), n.decay_factor)).collect();
    let district_bounds =
        compute_district_bounds(&config.districts, &assignment, &positions, &freshness_of, snapshot.nodes.len());

    let connections = select_connections(&snapshot.edges, &assignment, config.max_connections);

    let (active_district, district_activity) =
        score_active_district(recent_documents, &config.districts, &config.source_weights_by_pattern);

    Ok(result::LayoutFrame {
        algorithm: ALGORITHM.to_string(),
        district_bounds,
        buildings,
        connections,
        active_district,
        district_activity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use memcity_model::{WeightedEdge, WeightedNode};

    fn node(id: &str, label: &str, entity_type: &str, mention_count: i64) -> WeightedNode {
        WeightedNode {
            id: id.to_string(),
            label: label.to_string(),
            entity_type: entity_type.to_string(),
            mention_count,
            first_seen_ms: 0,
            last_seen_ms: 0,
            sources: vec!["memory/a.md".to_string()],
            display_weight: 1.0,
            source_bonus: 1.0,
            decay_factor: 0.8,
            age_ms: 0,
        }
    }

    #[test]
    fn project_produces_one_building_per_node() {
        let snapshot = Snapshot::new(
            1,
            DateTime::<Utc>::from_timestamp_millis(0).unwrap(),
            vec![node("tool:docker", "docker", "tool", 5), node("person:anton", "Anton", "person", 3)],
            vec![WeightedEdge {
                source_id: "tool:docker".to_string(),
                target_id: "person:anton".to_string(),
                co_occurrence_count: 2,
                last_seen_ms: 0,
                display_weight: 1.0,
                decay_factor: 1.0,
            }],
        );

        let frame = project(&snapshot, &[], &LayoutConfig::default()).unwrap();
        assert_eq!(frame.buildings.len(), 2);
        assert_eq!(frame.algorithm, ALGORITHM);
        assert_eq!(frame.connections.len(), 1);
    }

    #[test]
    fn project_rejects_dangling_edge_endpoints() {
        let snapshot = Snapshot::new(
            1,
            DateTime::<Utc>::from_timestamp_millis(0).unwrap(),
            vec![node("tool:docker", "docker", "tool", 1)],
            vec![WeightedEdge {
                source_id: "tool:docker".to_string(),
                target_id: "person:ghost".to_string(),
                co_occurrence_count: 2,
                last_seen_ms: 0,
                display_weight: 1.0,
                decay_factor: 1.0,
            }],
        );

        let err = project(&snapshot, &[], &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::DanglingEdgeEndpoint(id) if id == "person:ghost"));
    }

    #[test]
    fn project_is_deterministic() {
        let snapshot = Snapshot::new(
            1,
            DateTime::<Utc>::from_timestamp_millis(0).unwrap(),
            vec![node("tool:docker", "docker", "tool", 5), node("ticker:nvda", "NVDA", "ticker", 2)],
            vec![],
        );
        let config = LayoutConfig::default();
        let a = project(&snapshot, &[], &config).unwrap();
        let b = project(&snapshot, &[], &config).unwrap();
        assert_eq!(a, b);
    }
}
