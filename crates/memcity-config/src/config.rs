use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::districts::DistrictDefinitions;
use crate::error::{ConfigError, ConfigResult};
use crate::lexicons::DEFAULT_TICKER_STOPLIST;

const ENV_WORKSPACE_PATH: &str = "MEMCITY_WORKSPACE_PATH";
const ENV_DEBOUNCE_MS: &str = "MEMCITY_DEBOUNCE_MS";
const ENV_REBUILD_ON_DELETE: &str = "MEMCITY_REBUILD_ON_DELETE";
const ENV_TICKER_WHITELIST: &str = "MEMCITY_TICKER_WHITELIST";
const ENV_TICKER_STOPLIST: &str = "MEMCITY_TICKER_STOPLIST";
const ENV_CONFIG_FILE: &str = "MEMCITY_CONFIG_FILE";
const ENV_LAYOUT_ITERATIONS: &str = "MEMCITY_LAYOUT_ITERATIONS";
const ENV_LAYOUT_BOUNDS: &str = "MEMCITY_LAYOUT_BOUNDS";
const ENV_MAX_CONNECTIONS: &str = "MEMCITY_MAX_CONNECTIONS";

const DEFAULT_DEBOUNCE_MS: u64 = 500;
const DEFAULT_LAYOUT_ITERATIONS: u32 = 150;
const DEFAULT_LAYOUT_BOUNDS: f64 = 80.0;
const DEFAULT_MAX_CONNECTIONS: usize = 150;

/// Half-life, in days, per entity type (spec §4.3). Types absent from this
/// table fall back to [`Config::default_half_life_days`]. Spec.md marks
/// these literal values as examples that must remain externally
/// configurable; they are nonetheless this implementation's defaults.
fn default_half_lives_by_type() -> HashMap<String, f64> {
    let mut m = HashMap::new();
    m.insert("ticker".to_string(), 7.0);
    m.insert("url".to_string(), 14.0);
    m.insert("topic".to_string(), 30.0);
    m.insert("header".to_string(), 30.0);
    m.insert("concept".to_string(), 30.0);
    m.insert("organization".to_string(), 45.0);
    m.insert("person".to_string(), 60.0);
    m.insert("decision".to_string(), 60.0);
    m.insert("tool".to_string(), 90.0);
    m
}

/// Source-weight multipliers keyed by a document-path substring pattern
/// (spec §4.3); "contains, first match wins" against
/// [`Config::source_weight_for`], in declaration order.
fn default_source_weights_by_pattern() -> Vec<(String, f64)> {
    vec![
        ("SOUL.md".to_string(), 5.0),
        ("MEMORY.md".to_string(), 3.0),
        ("USER.md".to_string(), 3.0),
        ("AGENTS.md".to_string(), 2.0),
        ("TOOLS.md".to_string(), 2.0),
        ("memory/".to_string(), 1.0),
    ]
}

/// Runtime configuration for the whole pipeline (spec §6). Built by
/// [`Config::load`], which layers environment variables over these
/// defaults and an optional TOML file for the district/lexicon tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub workspace_path: PathBuf,
    pub debounce_ms: u64,
    pub rebuild_on_delete: bool,
    pub ticker_whitelist: Vec<String>,
    pub ticker_stoplist: Vec<String>,
    pub half_lives_by_type: HashMap<String, f64>,
    pub default_half_life_days: f64,
    pub source_weights_by_pattern: Vec<(String, f64)>,
    pub default_source_weight: f64,
    pub layout_iterations: u32,
    pub layout_bounds: f64,
    pub max_connections: usize,
    pub district_definitions: DistrictDefinitions,
}

impl Config {
    /// Loads configuration from `MEMCITY_*` environment variables, falling
    /// back to these defaults for anything unset. `MEMCITY_CONFIG_FILE`, if
    /// set, points to a TOML file providing [`DistrictDefinitions`]; its
    /// absence is not an error, only an unset variable is.
    pub fn load() -> ConfigResult<Self> {
        let mut cfg = Self::defaults();

        if let Ok(v) = env::var(ENV_WORKSPACE_PATH) {
            cfg.workspace_path = PathBuf::from(v);
        }
        if let Ok(v) = env::var(ENV_DEBOUNCE_MS) {
            cfg.debounce_ms = v.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_DEBOUNCE_MS,
                value: v.clone(),
                reason: "expected an unsigned integer".to_string(),
            })?;
        }
        if let Ok(v) = env::var(ENV_REBUILD_ON_DELETE) {
            cfg.rebuild_on_delete = parse_bool(&v).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_REBUILD_ON_DELETE,
                value: v.clone(),
                reason: "expected true/false".to_string(),
            })?;
        }
        if let Ok(v) = env::var(ENV_TICKER_WHITELIST) {
            cfg.ticker_whitelist = split_csv(&v);
        }
        if let Ok(v) = env::var(ENV_TICKER_STOPLIST) {
            cfg.ticker_stoplist = split_csv(&v);
        }
        if let Ok(v) = env::var(ENV_LAYOUT_ITERATIONS) {
            cfg.layout_iterations = v.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LAYOUT_ITERATIONS,
                value: v.clone(),
                reason: "expected an unsigned integer".to_string(),
            })?;
        }
        if let Ok(v) = env::var(ENV_LAYOUT_BOUNDS) {
            cfg.layout_bounds = v.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LAYOUT_BOUNDS,
                value: v.clone(),
                reason: "expected a floating point number".to_string(),
            })?;
        }
        if let Ok(v) = env::var(ENV_MAX_CONNECTIONS) {
            cfg.max_connections = v.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_MAX_CONNECTIONS,
                value: v.clone(),
                reason: "expected an unsigned integer".to_string(),
            })?;
        }
        if let Ok(path) = env::var(ENV_CONFIG_FILE) {
            cfg.district_definitions = Self::load_district_definitions(Path::new(&path))?;
        }

        Ok(cfg)
    }

    /// The baseline configuration before any environment overlay; used by
    /// [`load`](Self::load) and directly by tests that want a deterministic
    /// `Config` without touching process environment.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            workspace_path: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("memcity")
                .join("workspace"),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            rebuild_on_delete: true,
            ticker_whitelist: Vec::new(),
            ticker_stoplist: DEFAULT_TICKER_STOPLIST
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            half_lives_by_type: default_half_lives_by_type(),
            default_half_life_days: 30.0,
            source_weights_by_pattern: default_source_weights_by_pattern(),
            default_source_weight: 1.0,
            layout_iterations: DEFAULT_LAYOUT_ITERATIONS,
            layout_bounds: DEFAULT_LAYOUT_BOUNDS,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            district_definitions: DistrictDefinitions::defaults(),
        }
    }

    fn load_district_definitions(path: &Path) -> ConfigResult<DistrictDefinitions> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Half-life in days for `entity_type`, falling back to
    /// [`Self::default_half_life_days`] for unconfigured types (spec §4.2).
    #[must_use]
    pub fn half_life_days(&self, entity_type: &str) -> f64 {
        self.half_lives_by_type
            .get(entity_type)
            .copied()
            .unwrap_or(self.default_half_life_days)
    }

    /// Source-weight multiplier for a document path: first pattern whose
    /// substring appears in `document_path` wins, in declaration order
    /// (spec §4.3); unmatched paths get [`Self::default_source_weight`].
    #[must_use]
    pub fn source_weight_for(&self, document_path: &str) -> f64 {
        self.source_weights_by_pattern
            .iter()
            .find(|(pattern, _)| document_path.contains(pattern.as_str()))
            .map(|(_, weight)| *weight)
            .unwrap_or(self.default_source_weight)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_spec_literal_values() {
        let cfg = Config::defaults();
        assert_eq!(cfg.debounce_ms, 500);
        assert!(cfg.rebuild_on_delete);
        assert_eq!(cfg.layout_iterations, 150);
        assert_eq!(cfg.max_connections, 150);
        assert!((cfg.layout_bounds - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn half_life_days_falls_back_to_default_for_unknown_type() {
        let cfg = Config::defaults();
        assert_eq!(cfg.half_life_days("ticker"), 7.0);
        assert_eq!(cfg.half_life_days("tool"), 90.0);
        assert_eq!(cfg.half_life_days("unknown_type"), cfg.default_half_life_days);
    }

    #[test]
    fn source_weight_for_matches_first_pattern_in_order() {
        let cfg = Config::defaults();
        assert_eq!(cfg.source_weight_for("workspace/SOUL.md"), 5.0);
        assert_eq!(cfg.source_weight_for("workspace/MEMORY.md"), 3.0);
        assert_eq!(cfg.source_weight_for("workspace/memory/2026-01-05.md"), 1.0);
        assert_eq!(cfg.source_weight_for("workspace/notes.md"), 1.0);
    }

    #[test]
    fn split_csv_trims_and_uppercases() {
        assert_eq!(
            split_csv(" aapl, msft ,goog"),
            vec!["AAPL".to_string(), "MSFT".to_string(), "GOOG".to_string()]
        );
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn load_district_definitions_reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("districts.toml");
        std::fs::write(&path, toml::to_string(&DistrictDefinitions::defaults()).unwrap())
            .unwrap();
        let loaded = Config::load_district_definitions(&path).unwrap();
        assert_eq!(loaded, DistrictDefinitions::defaults());
    }

    #[test]
    fn load_district_definitions_reports_missing_file() {
        let err = Config::load_district_definitions(Path::new("/nonexistent/districts.toml"));
        assert!(matches!(err, Err(ConfigError::ReadFile { .. })));
    }
}
