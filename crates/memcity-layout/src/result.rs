use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use memcity_model::Building;

use crate::connections::Connection;
use crate::district_bounds::DistrictBound;

/// The fixed algorithm tag carried by every layout result frame (spec §6).
pub const ALGORITHM: &str = "brain-optimized-v2";

/// The complete output of [`crate::project`] (spec §4.5 / §6's layout
/// result frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrame {
    pub algorithm: String,
    pub district_bounds: FxHashMap<String, DistrictBound>,
    pub buildings: Vec<Building>,
    pub connections: Vec<Connection>,
    pub active_district: String,
    pub district_activity: FxHashMap<String, f64>,
}
