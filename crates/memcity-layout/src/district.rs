use memcity_config::DistrictDefinitions;

/// District assignment (spec §4.5): lower-cases `label`, scores it against
/// every district by summing 1 for each of that district's keywords
/// contained in the label, and returns the highest-scoring district. Ties
/// fall through to declaration order; a zero score across every district
/// defaults to `districts.default_district`.
#[must_use]
pub fn assign_district<'a>(label: &str, districts: &'a DistrictDefinitions) -> &'a str {
    let lower = label.to_lowercase();
    let mut best_name: Option<&str> = None;
    let mut best_score = 0i32;

    for district in &districts.districts {
        let score: i32 = district
            .keywords
            .iter()
            .filter(|kw| lower.contains(kw.as_str()))
            .count() as i32;
        if score > best_score {
            best_score = score;
            best_name = Some(district.name.as_str());
        }
    }

    best_name.unwrap_or(&districts.default_district)
}

/// Polar angle, in radians, of a district's base position (spec §4.5's
/// initial-placement `angle = polar_angle(district_base) + Δ`).
#[must_use]
pub fn polar_angle(base_x: f64, base_z: f64) -> f64 {
    base_z.atan2(base_x)
}
