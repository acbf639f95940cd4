use memcity_config::{Config, DistrictDefinitions};

/// The subset of [`memcity_config::Config`] the Layout Projector needs
/// (spec §6): district/keyword definitions, the fixed iteration count and
/// bounding square, and the connection cap.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub iterations: u32,
    pub bounds: f64,
    pub max_connections: usize,
    pub districts: DistrictDefinitions,
    /// Source-weight table, used to resolve the "top-weighted source" used
    /// by building sizing (spec §4.5) and the active-district heuristic.
    pub source_weights_by_pattern: Vec<(String, f64)>,
}

impl LayoutConfig {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            iterations: config.layout_iterations,
            bounds: config.layout_bounds,
            max_connections: config.max_connections,
            districts: config.district_definitions.clone(),
            source_weights_by_pattern: config.source_weights_by_pattern.clone(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::from_config(&Config::defaults())
    }
}
