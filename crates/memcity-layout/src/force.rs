use rustc_hash::FxHashMap;

use memcity_model::WeightedEdge;

use crate::placement::Particle;

const REPULSION_RADIUS: f64 = 25.0;
const REPULSION_R: f64 = 50.0;
const REPULSION_F_MAX: f64 = 5.0;
const ATTRACTION_A: f64 = 0.02;
const DISTRICT_PULL_STRENGTH: f64 = 0.05;
const DISTRICT_PULL_TARGET_FRACTION: f64 = 0.6;
const CORE_PULL_STRENGTH: f64 = 0.02;
const DAMPING: f64 = 0.85;

/// Cooling factor `T(k) = (1 - k/K)^0.5` (spec §4.5).
#[must_use]
fn cooling(iteration: u32, total_iterations: u32) -> f64 {
    if total_iterations == 0 {
        return 0.0;
    }
    (1.0 - f64::from(iteration) / f64::from(total_iterations)).max(0.0).sqrt()
}

/// One node's simulation inputs that don't change across iterations: its
/// normalized importance and assigned district's base position.
#[derive(Debug, Clone, Copy)]
pub struct NodeSimContext {
    pub normalized_importance: f64,
    pub district_base: (f64, f64),
}

/// Runs the fixed-iteration-count force simulation (spec §4.5): repulsion
/// between nearby nodes, co-occurrence attraction, district pull, and core
/// pull, with a cooling schedule and per-node effective mass. Positions are
/// clamped in-place to the `[-bounds, bounds]` bounding square every
/// iteration.
pub fn simulate(
    ids: &[String],
    mut particles: Vec<Particle>,
    contexts: &FxHashMap<String, NodeSimContext>,
    edges: &[WeightedEdge],
    iterations: u32,
    bounds: f64,
) -> Vec<Particle> {
    let index_of: FxHashMap<&str, usize> =
        ids.iter().enumerate().map(|(i, id)| (id.as_str(), i)).collect();

    // Co-occurrence adjacency resolved once: (index_a, index_b, count).
    let adjacency: Vec<(usize, usize, i64)> = edges
        .iter()
        .filter_map(|e| {
            let a = *index_of.get(e.source_id.as_str())?;
            let b = *index_of.get(e.target_id.as_str())?;
            Some((a, b, e.co_occurrence_count))
        })
        .collect();

    for iteration in 0..iterations {
        let t = cooling(iteration, iterations);
        let mut forces = vec![(0.0f64, 0.0f64); particles.len()];

        // Repulsion: every pair within REPULSION_RADIUS units.
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let dx = particles[i].x - particles[j].x;
                let dz = particles[i].z - particles[j].z;
                let dist_sq = dx * dx + dz * dz;
                if dist_sq > REPULSION_RADIUS * REPULSION_RADIUS {
                    continue;
                }
                let dist = dist_sq.sqrt().max(1e-6);
                let magnitude = (REPULSION_R / (dist_sq + 1.0)).min(REPULSION_F_MAX) * t;
                let (ux, uz) = (dx / dist, dz / dist);
                forces[i].0 += ux * magnitude;
                forces[i].1 += uz * magnitude;
                forces[j].0 -= ux * magnitude;
                forces[j].1 -= uz * magnitude;
            }
        }

        // Attraction: every co-occurrence pair, proportional to distance.
        for &(a, b, count) in &adjacency {
            let dx = particles[b].x - particles[a].x;
            let dz = particles[b].z - particles[a].z;
            let dist = (dx * dx + dz * dz).sqrt();
            if dist < 1e-9 {
                continue;
            }
            let magnitude = ATTRACTION_A * (count as f64).sqrt() * dist * t;
            let (ux, uz) = (dx / dist, dz / dist);
            forces[a].0 += ux * magnitude;
            forces[a].1 += uz * magnitude;
            forces[b].0 -= ux * magnitude;
            forces[b].1 -= uz * magnitude;
        }

        // District pull and core pull, per node.
        for (idx, id) in ids.iter().enumerate() {
            let Some(ctx) = contexts.get(id) else { continue };
            let (base_x, base_z) = ctx.district_base;
            let target_x = base_x * DISTRICT_PULL_TARGET_FRACTION;
            let target_z = base_z * DISTRICT_PULL_TARGET_FRACTION;
            forces[idx].0 += (target_x - particles[idx].x) * DISTRICT_PULL_STRENGTH * t;
            forces[idx].1 += (target_z - particles[idx].z) * DISTRICT_PULL_STRENGTH * t;

            forces[idx].0 += (0.0 - particles[idx].x) * CORE_PULL_STRENGTH * ctx.normalized_importance * t;
            forces[idx].1 += (0.0 - particles[idx].z) * CORE_PULL_STRENGTH * ctx.normalized_importance * t;
        }

        // Integrate velocity and position.
        for (idx, id) in ids.iter().enumerate() {
            let normalized_importance = contexts.get(id).map_or(0.0, |c| c.normalized_importance);
            let mass = 1.0 + 2.0 * normalized_importance;
            let (fx, fz) = forces[idx];

            particles[idx].vx = DAMPING * (particles[idx].vx + fx / mass);
            particles[idx].vz = DAMPING * (particles[idx].vz + fz / mass);
            particles[idx].x = (particles[idx].x + particles[idx].vx).clamp(-bounds, bounds);
            particles[idx].z = (particles[idx].z + particles[idx].vz).clamp(-bounds, bounds);
        }
    }

    particles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(normalized_importance: f64, district_base: (f64, f64)) -> NodeSimContext {
        NodeSimContext { normalized_importance, district_base }
    }

    #[test]
    fn simulation_keeps_every_position_within_bounds() {
        let ids: Vec<String> = (0..20).map(|i| format!("tool:item{i}")).collect();
        let particles: Vec<Particle> = ids
            .iter()
            .map(|id| crate::placement::initial_placement(id, 0.5, (60.0, 0.0)))
            .collect();
        let contexts: FxHashMap<String, NodeSimContext> =
            ids.iter().map(|id| (id.clone(), ctx(0.5, (60.0, 0.0)))).collect();

        let result = simulate(&ids, particles, &contexts, &[], 150, 80.0);
        for p in &result {
            assert!(p.x.abs() <= 80.0 + 1e-9);
            assert!(p.z.abs() <= 80.0 + 1e-9);
        }
    }

    #[test]
    fn simulation_is_deterministic() {
        let ids: Vec<String> = vec!["a:x".to_string(), "b:y".to_string()];
        let particles: Vec<Particle> =
            ids.iter().map(|id| crate::placement::initial_placement(id, 0.3, (0.0, 0.0))).collect();
        let contexts: FxHashMap<String, NodeSimContext> =
            ids.iter().map(|id| (id.clone(), ctx(0.3, (0.0, 0.0)))).collect();
        let edges = vec![WeightedEdge {
            source_id: "a:x".to_string(),
            target_id: "b:y".to_string(),
            co_occurrence_count: 3,
            last_seen_ms: 0,
            display_weight: 1.0,
            decay_factor: 1.0,
        }];

        let r1 = simulate(&ids, particles.clone(), &contexts, &edges, 150, 80.0);
        let r2 = simulate(&ids, particles, &contexts, &edges, 150, 80.0);
        assert_eq!(r1, r2);
    }

    #[test]
    fn cooling_decreases_to_zero_at_final_iteration() {
        assert!((cooling(0, 150) - 1.0).abs() < 1e-9);
        assert!(cooling(150, 150).abs() < 1e-9);
        assert!(cooling(75, 150) < cooling(0, 150));
    }
}
