use memcity_model::WeightedNode;

/// Piecewise height-by-importance bands (spec §4.5's Building sizing table).
#[must_use]
fn height_band(normalized_importance: f64) -> f64 {
    if normalized_importance > 0.8 {
        40.0 + 30.0 * normalized_importance
    } else if normalized_importance > 0.5 {
        25.0 + 30.0 * normalized_importance
    } else if normalized_importance > 0.2 {
        12.0 + 26.0 * normalized_importance
    } else {
        5.0 + 20.0 * normalized_importance
    }
}

/// Final building height (spec §4.5): the piecewise band, multiplied by 1.4
/// if the node's source set contains the top-weighted source, then capped
/// at 25 for `ticker`-typed nodes.
#[must_use]
pub fn building_height(node: &WeightedNode, normalized_importance: f64, top_source_pattern: Option<&str>) -> f64 {
    let mut height = height_band(normalized_importance);

    if let Some(pattern) = top_source_pattern {
        if node.sources.iter().any(|s| s.contains(pattern)) {
            height *= 1.4;
        }
    }

    if node.entity_type == "ticker" {
        height = height.min(25.0);
    }

    height
}

/// Footprint (width/depth) is not given an explicit formula by `spec.md`
/// §4.5; this implementation scales it with height so taller buildings read
/// as visually heavier rather than spindly (a design decision recorded in
/// `DESIGN.md`).
#[must_use]
pub fn building_footprint(height: f64) -> f64 {
    (height * 0.4).max(4.0)
}

/// The path-pattern with the highest configured source weight, used as the
/// "top-weighted source" referenced by the 1.4x sizing bonus.
#[must_use]
pub fn top_weighted_source_pattern(source_weights_by_pattern: &[(String, f64)]) -> Option<&str> {
    source_weights_by_pattern
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(pattern, _)| pattern.as_str())
}
