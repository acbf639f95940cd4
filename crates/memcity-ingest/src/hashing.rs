use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Deterministic content hash used to discard no-op file-change events
/// (spec §4.4: "compute its hash. If the hash is unchanged, discard the
/// event"). Not cryptographic; only used for equality comparison within a
/// single running process, so `FxHasher`'s speed matters more than its
/// collision resistance.
#[must_use]
pub fn content_hash(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    bytes.hash(&mut hasher);
    hasher.finish()
}
