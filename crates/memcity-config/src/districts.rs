use serde::{Deserialize, Serialize};

/// One configured district (spec §4.5): a keyword list, a polar base
/// position, a display color, and an importance multiplier in `[0.9, 1.5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictDef {
    pub name: String,
    pub keywords: Vec<String>,
    pub base_x: f64,
    pub base_z: f64,
    pub color: String,
    pub importance_multiplier: f64,
}

/// The closed set of districts, in declaration order — ties in keyword
/// scoring fall through to earlier declarations (spec §4.5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictDefinitions {
    pub districts: Vec<DistrictDef>,
    /// District new nodes default into when every keyword score is zero.
    pub default_district: String,
}

impl DistrictDefinitions {
    /// The "v2" district set this spec adopts (spec §9's open question:
    /// do not reconcile with an earlier variant). Concrete keyword lists,
    /// positions, colors, and multipliers are this implementation's
    /// defaults; spec.md §4.5 gives them only as examples.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            districts: vec![
                DistrictDef {
                    name: "trading".to_string(),
                    keywords: vec![
                        "ticker", "stock", "trade", "trading", "market", "allocation",
                        "portfolio", "invest", "price",
                    ]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                    base_x: 60.0,
                    base_z: 0.0,
                    color: "#e0a100".to_string(),
                    importance_multiplier: 1.3,
                },
                DistrictDef {
                    name: "infrastructure".to_string(),
                    keywords: vec![
                        "server", "deploy", "docker", "ci", "cloud", "kubernetes",
                        "container", "infra", "pipeline",
                    ]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                    base_x: -60.0,
                    base_z: 0.0,
                    color: "#4a90d9".to_string(),
                    importance_multiplier: 1.1,
                },
                DistrictDef {
                    name: "projects".to_string(),
                    keywords: vec!["project", "feature", "roadmap", "sprint", "milestone"]
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    base_x: 0.0,
                    base_z: 60.0,
                    color: "#6fbf73".to_string(),
                    importance_multiplier: 1.0,
                },
                DistrictDef {
                    name: "core".to_string(),
                    keywords: vec!["decision", "person", "organization", "decided", "committed"]
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    base_x: 0.0,
                    base_z: 0.0,
                    color: "#e0e0e0".to_string(),
                    importance_multiplier: 1.5,
                },
                DistrictDef {
                    name: "memory".to_string(),
                    keywords: Vec::new(),
                    base_x: 0.0,
                    base_z: -60.0,
                    color: "#9b8cf2".to_string(),
                    importance_multiplier: 0.9,
                },
            ],
            default_district: "memory".to_string(),
        }
    }
}

impl Default for DistrictDefinitions {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_include_memory_as_default_district() {
        let d = DistrictDefinitions::defaults();
        assert_eq!(d.default_district, "memory");
        assert!(d.districts.iter().any(|dd| dd.name == "memory"));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let d = DistrictDefinitions::defaults();
        let s = toml::to_string(&d).unwrap();
        let back: DistrictDefinitions = toml::from_str(&s).unwrap();
        assert_eq!(d, back);
    }

    #[test]
    fn all_importance_multipliers_within_spec_range() {
        for d in &DistrictDefinitions::defaults().districts {
            assert!(d.importance_multiplier >= 0.9 && d.importance_multiplier <= 1.5);
        }
    }
}
