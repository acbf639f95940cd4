use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Deterministic 64-bit hash of a node id. Spec §4.5 requires the
/// per-node jitter and initial velocity to come from "a hash of the node
/// id, not an RNG." `std::collections::hash_map::DefaultHasher` is
/// intentionally avoided: its algorithm is unspecified and may change
/// across toolchain versions, which would break the "same input, same
/// output across runs" determinism property (spec §8's "Layout
/// determinism"). `FxHasher` pins a stable, documented bit-mixing
/// algorithm instead.
#[must_use]
fn hash_id(id: &str) -> u64 {
    let mut hasher = FxHasher::default();
    id.hash(&mut hasher);
    hasher.finish()
}

/// Deterministic per-node angular jitter in `[-0.6, 0.6]` radians (spec
/// §4.5's initial placement `Δ`).
#[must_use]
pub fn jitter_radians(id: &str) -> f64 {
    let h = hash_id(id);
    // top 32 bits -> [0, 1) -> [-0.6, 0.6]
    let unit = (h >> 32) as f64 / u32::MAX as f64;
    unit * 1.2 - 0.6
}

/// Deterministic per-node initial velocity, each component in `[-0.5, 0.5]`
/// (spec §4.5: "initial per-node velocities come from a hash of the node
/// id, not an RNG").
#[must_use]
pub fn initial_velocity(id: &str) -> (f64, f64) {
    let h = hash_id(id);
    let lo = (h & 0xFFFF_FFFF) as f64 / u32::MAX as f64;
    let hi = (h >> 32) as f64 / u32::MAX as f64;
    (lo - 0.5, hi - 0.5)
}
