use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use memcity_config::DistrictDefinitions;

use crate::placement::Particle;

/// One district's extent after simulation (spec §4.5 / §6's
/// `district_bounds` frame entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictBound {
    pub center_x: f64,
    pub center_z: f64,
    pub radius: f64,
    pub entity_count: usize,
    pub color: String,
}

/// Computes each configured district's bound (spec §4.5): radius grows with
/// the district's share of all nodes, plus a freshness-driven expansion
/// bonus, and the center is the centroid of its settled buildings (the base
/// position when a district has none).
#[must_use]
pub fn compute_district_bounds(
    districts: &DistrictDefinitions,
    assignment: &FxHashMap<String, String>,
    positions: &FxHashMap<String, Particle>,
    freshness_of: &FxHashMap<String, f64>,
    total_nodes: usize,
) -> FxHashMap<String, DistrictBound> {
    let mut result = FxHashMap::default();

    for district in &districts.districts {
        let members: Vec<&String> =
            assignment.iter().filter(|(_, d)| *d == &district.name).map(|(id, _)| id).collect();
        let count = members.len();

        let fraction = if total_nodes == 0 { 0.0 } else { count as f64 / total_nodes as f64 };
        let fresh_count =
            members.iter().filter(|id| freshness_of.get(id.as_str()).copied().unwrap_or(0.0) > 0.5).count();
        let bonus = if fresh_count > 5 {
            15.0
        } else if fresh_count > 2 {
            8.0
        } else {
            0.0
        };
        let radius = 25.0 + fraction.sqrt() * 40.0 + bonus;

        let (center_x, center_z) = if members.is_empty() {
            (district.base_x, district.base_z)
        } else {
            let (sum_x, sum_z) = members.iter().fold((0.0, 0.0), |(sx, sz), id| {
                positions.get(id.as_str()).map_or((sx, sz), |p| (sx + p.x, sz + p.z))
            });
            (sum_x / count as f64, sum_z / count as f64)
        };

        result.insert(
            district.name.clone(),
            DistrictBound { center_x, center_z, radius, entity_count: count, color: district.color.clone() },
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_grows_with_district_share() {
        let districts = DistrictDefinitions::defaults();
        let mut assignment = FxHashMap::default();
        assignment.insert("a".to_string(), "core".to_string());
        assignment.insert("b".to_string(), "core".to_string());
        assignment.insert("c".to_string(), "memory".to_string());

        let mut positions = FxHashMap::default();
        positions.insert("a".to_string(), Particle { x: 1.0, z: 1.0, vx: 0.0, vz: 0.0 });
        positions.insert("b".to_string(), Particle { x: 3.0, z: 3.0, vx: 0.0, vz: 0.0 });
        positions.insert("c".to_string(), Particle { x: 0.0, z: -60.0, vx: 0.0, vz: 0.0 });

        let bounds = compute_district_bounds(&districts, &assignment, &positions, &FxHashMap::default(), 3);
        let core = &bounds["core"];
        let memory = &bounds["memory"];
        assert!(core.radius > memory.radius);
        assert!((core.center_x - 2.0).abs() < 1e-9);
        assert!((core.center_z - 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_district_falls_back_to_base_position() {
        let districts = DistrictDefinitions::defaults();
        let bounds =
            compute_district_bounds(&districts, &FxHashMap::default(), &FxHashMap::default(), &FxHashMap::default(), 0);
        let trading = &bounds["trading"];
        assert!((trading.center_x - 60.0).abs() < 1e-9);
        assert_eq!(trading.entity_count, 0);
    }

    #[test]
    fn fresh_heavy_district_gets_expansion_bonus() {
        let districts = DistrictDefinitions::defaults();
        let mut assignment = FxHashMap::default();
        let mut freshness = FxHashMap::default();
        let mut positions = FxHashMap::default();
        for i in 0..6 {
            let id = format!("n{i}");
            assignment.insert(id.clone(), "core".to_string());
            freshness.insert(id.clone(), 0.9);
            positions.insert(id, Particle { x: 0.0, z: 0.0, vx: 0.0, vz: 0.0 });
        }
        let bounds = compute_district_bounds(&districts, &assignment, &positions, &freshness, 6);
        assert!((bounds["core"].radius - (25.0 + 1.0f64.sqrt() * 40.0 + 15.0)).abs() < 1e-9);
    }
}
