use crate::district::polar_angle;
use crate::hashing::jitter_radians;

/// A node's mutable simulation state: position and velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub z: f64,
    pub vx: f64,
    pub vz: f64,
}

/// Initial placement (spec §4.5): `core_distance = 10 + (1 - î^0.4) * 45`,
/// `angle = polar_angle(district_base) + jitter(id)`, with jitter a
/// deterministic per-node hash-derived value, never an RNG draw.
#[must_use]
pub fn initial_placement(id: &str, normalized_importance: f64, district_base: (f64, f64)) -> Particle {
    let core_distance = 10.0 + (1.0 - normalized_importance.powf(0.4)) * 45.0;
    let angle = polar_angle(district_base.0, district_base.1) + jitter_radians(id);
    let (vx, vz) = crate::hashing::initial_velocity(id);

    Particle {
        x: angle.cos() * core_distance,
        z: angle.sin() * core_distance,
        vx,
        vz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_importance_places_closer_to_core() {
        let close = initial_placement("tool:docker", 1.0, (60.0, 0.0));
        let far = initial_placement("tool:docker", 0.0, (60.0, 0.0));
        let close_dist = (close.x.powi(2) + close.z.powi(2)).sqrt();
        let far_dist = (far.x.powi(2) + far.z.powi(2)).sqrt();
        assert!(close_dist < far_dist);
    }

    #[test]
    fn placement_is_deterministic() {
        let a = initial_placement("person:anton", 0.4, (0.0, -60.0));
        let b = initial_placement("person:anton", 0.4, (0.0, -60.0));
        assert_eq!(a, b);
    }
}
