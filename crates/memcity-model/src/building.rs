use serde::{Deserialize, Serialize};

/// A node projected into the city layout: produced per layout run from a
/// snapshot, never persisted (spec §3). Owned by the Layout Projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub label: String,
    pub district: String,
    pub x: f64,
    pub z: f64,
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub importance: f64,
    pub frequency: i64,
    pub recency_score: f64,
    pub source_score: f64,
    pub sources: Vec<String>,
}
