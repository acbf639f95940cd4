use chrono::{DateTime, Utc};

/// A watched memory file. The Ingestion Supervisor exclusively owns this
/// table (spec §3's Ownership rule); `memcity-model` only defines the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the watched workspace root, e.g. `"memory/2026-01-15.md"`.
    pub relative_path: String,
    pub last_modified: DateTime<Utc>,
    /// Name of the source-weight bucket this path matched (spec §4.3),
    /// cached so decay doesn't need to re-run pattern matching per node.
    pub source_weight_class: String,
    pub content: String,
}

impl Document {
    #[must_use]
    pub fn new(
        relative_path: impl Into<String>,
        last_modified: DateTime<Utc>,
        source_weight_class: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            last_modified,
            source_weight_class: source_weight_class.into(),
            content: content.into(),
        }
    }
}
