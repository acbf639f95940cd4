use std::collections::HashMap;

use memcity_config::Config;

/// Half-life in days per entity type (spec §4.3). Types absent from the
/// table fall back to `default_days`.
///
/// `default()` carries the literal values `spec.md` gives as examples;
/// [`HalfLifeTable::from_config`] is the path a real pipeline uses so the
/// table is genuinely externally configurable, per `spec.md` §6.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfLifeTable {
    by_type: HashMap<String, f64>,
    default_days: f64,
}

impl HalfLifeTable {
    #[must_use]
    pub fn new(by_type: HashMap<String, f64>, default_days: f64) -> Self {
        Self { by_type, default_days }
    }

    /// Builds the table from a loaded [`Config`]'s `half_lives_by_type` /
    /// `default_half_life_days` settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            by_type: config.half_lives_by_type.clone(),
            default_days: config.default_half_life_days,
        }
    }

    #[must_use]
    pub fn days_for(&self, entity_type: &str) -> f64 {
        self.by_type.get(entity_type).copied().unwrap_or(self.default_days)
    }

    #[must_use]
    pub fn default_days(&self) -> f64 {
        self.default_days
    }
}

impl Default for HalfLifeTable {
    fn default() -> Self {
        let mut by_type = HashMap::new();
        by_type.insert("ticker".to_string(), 7.0);
        by_type.insert("url".to_string(), 14.0);
        by_type.insert("topic".to_string(), 30.0);
        by_type.insert("header".to_string(), 30.0);
        by_type.insert("concept".to_string(), 30.0);
        by_type.insert("organization".to_string(), 45.0);
        by_type.insert("person".to_string(), 60.0);
        by_type.insert("decision".to_string(), 60.0);
        by_type.insert("tool".to_string(), 90.0);
        Self { by_type, default_days: 30.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_literal_table() {
        let t = HalfLifeTable::default();
        assert_eq!(t.days_for("ticker"), 7.0);
        assert_eq!(t.days_for("tool"), 90.0);
        assert_eq!(t.days_for("person"), 60.0);
    }

    #[test]
    fn unknown_type_falls_back_to_default() {
        let t = HalfLifeTable::default();
        assert_eq!(t.days_for("unknown"), 30.0);
    }

    #[test]
    fn from_config_mirrors_config_table() {
        let cfg = Config::defaults();
        let t = HalfLifeTable::from_config(&cfg);
        assert_eq!(t.days_for("ticker"), cfg.half_life_days("ticker"));
        assert_eq!(t.default_days(), cfg.default_half_life_days);
    }
}
