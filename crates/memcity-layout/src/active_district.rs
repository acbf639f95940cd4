use rustc_hash::FxHashMap;

use memcity_config::DistrictDefinitions;

/// A recently-modified document fed to the active-district heuristic: just
/// enough to score keyword hits, not a full [`memcity_model::Document`].
#[derive(Debug, Clone)]
pub struct RecentDocument {
    pub path: String,
    pub content: String,
}

fn source_weight_for(path: &str, table: &[(String, f64)]) -> f64 {
    table.iter().find(|(pattern, _)| path.contains(pattern.as_str())).map_or(1.0, |(_, w)| *w)
}

/// Active-district heuristic (spec §4.5): given the three most-recently
/// modified documents, score each district by summing `0.1 * source_weight`
/// for every keyword that appears (case-insensitively) in a document's
/// content, then normalize by the maximum score. Returns the per-district
/// normalized activity and the name of the highest-scoring district.
///
/// An empty district list or an all-zero score set defaults `active` to the
/// configured default district with zero activity everywhere.
#[must_use]
pub fn score_active_district(
    recent_documents: &[RecentDocument],
    districts: &DistrictDefinitions,
    source_weights_by_pattern: &[(String, f64)],
) -> (String, FxHashMap<String, f64>) {
    let mut raw: FxHashMap<String, f64> =
        districts.districts.iter().map(|d| (d.name.clone(), 0.0)).collect();

    for district in &districts.districts {
        let mut score = 0.0;
        for keyword in &district.keywords {
            for doc in recent_documents {
                if doc.content.to_lowercase().contains(keyword.as_str()) {
                    score += 0.1 * source_weight_for(&doc.path, source_weights_by_pattern);
                }
            }
        }
        raw.insert(district.name.clone(), score);
    }

    let max = raw.values().copied().fold(0.0f64, f64::max);
    let normalized: FxHashMap<String, f64> = if max <= 0.0 {
        raw.into_keys().map(|name| (name, 0.0)).collect()
    } else {
        raw.into_iter().map(|(name, v)| (name, v / max)).collect()
    };

    let active = normalized
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map_or_else(|| districts.default_district.clone(), |(name, _)| name.clone());

    (active, normalized)
}
