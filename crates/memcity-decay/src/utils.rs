/// `bucket(node)` classification (spec §4.3): `Strong` above 0.7, `Stable`
/// between 0.3 and 0.7 inclusive, else `Fading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightBucket {
    Strong,
    Stable,
    Fading,
}

#[must_use]
pub fn bucket(display_weight: f64) -> WeightBucket {
    if display_weight > 0.7 {
        WeightBucket::Strong
    } else if display_weight >= 0.3 {
        WeightBucket::Stable
    } else {
        WeightBucket::Fading
    }
}

/// Closed-form days until `display_weight` decays to `threshold`, given the
/// node's half-life `half_life_days` (spec §4.3): `t = H *
/// log2(display_weight / threshold)`. Defined only when the node currently
/// exceeds the threshold; `None` otherwise (spec: "undefined otherwise").
#[must_use]
pub fn time_until(display_weight: f64, half_life_days: f64, threshold: f64) -> Option<f64> {
    if display_weight <= threshold || threshold <= 0.0 {
        return None;
    }
    Some(half_life_days * (display_weight / threshold).log2())
}
