use memcity_config::Config;

/// Source-weight multiplier per document-path pattern (spec §4.3):
/// "contains" match, first declared pattern wins, default 1.0 for anything
/// unmatched.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceWeightTable {
    by_pattern: Vec<(String, f64)>,
    default_weight: f64,
}

impl SourceWeightTable {
    #[must_use]
    pub fn new(by_pattern: Vec<(String, f64)>, default_weight: f64) -> Self {
        Self { by_pattern, default_weight }
    }

    /// Builds the table from a loaded [`Config`]'s `source_weights_by_pattern`
    /// / `default_source_weight` settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            by_pattern: config.source_weights_by_pattern.clone(),
            default_weight: config.default_source_weight,
        }
    }

    #[must_use]
    pub fn weight_for(&self, document_path: &str) -> f64 {
        self.by_pattern
            .iter()
            .find(|(pattern, _)| document_path.contains(pattern.as_str()))
            .map(|(_, weight)| *weight)
            .unwrap_or(self.default_weight)
    }

    /// The maximum source weight across `sources`, defaulting to 1.0 for an
    /// empty set (spec §4.3: `source_bonus = max over sources s of
    /// source_weight(s)`, default 1.0).
    #[must_use]
    pub fn max_weight<'a>(&self, sources: impl IntoIterator<Item = &'a str>) -> f64 {
        sources
            .into_iter()
            .map(|s| self.weight_for(s))
            .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.max(w))))
            .unwrap_or(1.0)
    }
}

impl Default for SourceWeightTable {
    fn default() -> Self {
        Self {
            by_pattern: vec![
                ("SOUL.md".to_string(), 5.0),
                ("MEMORY.md".to_string(), 3.0),
                ("USER.md".to_string(), 3.0),
                ("AGENTS.md".to_string(), 2.0),
                ("TOOLS.md".to_string(), 2.0),
                ("memory/".to_string(), 1.0),
            ],
            default_weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_first_pattern_in_declaration_order() {
        let t = SourceWeightTable::default();
        assert_eq!(t.weight_for("workspace/SOUL.md"), 5.0);
        assert_eq!(t.weight_for("workspace/MEMORY.md"), 3.0);
        assert_eq!(t.weight_for("workspace/memory/2026-01-05.md"), 1.0);
    }

    #[test]
    fn unmatched_path_gets_default() {
        let t = SourceWeightTable::default();
        assert_eq!(t.weight_for("scratch/notes.md"), 1.0);
    }

    #[test]
    fn max_weight_picks_the_highest_scoring_source() {
        let t = SourceWeightTable::default();
        let sources = vec!["memory/a.md", "SOUL.md", "scratch/notes.md"];
        assert_eq!(t.max_weight(sources), 5.0);
    }

    #[test]
    fn max_weight_defaults_to_one_for_no_sources() {
        let t = SourceWeightTable::default();
        let empty: Vec<&str> = Vec::new();
        assert_eq!(t.max_weight(empty), 1.0);
    }

    #[test]
    fn from_config_mirrors_config_table() {
        let cfg = Config::defaults();
        let t = SourceWeightTable::from_config(&cfg);
        assert_eq!(t.weight_for("SOUL.md"), cfg.source_weight_for("SOUL.md"));
    }
}
