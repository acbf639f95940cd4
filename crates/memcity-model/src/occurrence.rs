use crate::node::EntityType;
use serde::{Deserialize, Serialize};

/// A single typed mention of an entity within one paragraph of one document.
///
/// Derived by the extractor, never stored beyond one extraction pass
/// (spec §3's Occurrence lifecycle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub label: String,
    pub entity_type: EntityType,
    pub paragraph_index: usize,
    pub document: String,
}

impl Occurrence {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        entity_type: impl Into<String>,
        paragraph_index: usize,
        document: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            entity_type: entity_type.into(),
            paragraph_index,
            document: document.into(),
        }
    }

    /// The node id this occurrence maps to.
    #[must_use]
    pub fn node_id(&self) -> String {
        crate::ids::node_id(&self.entity_type, &self.label)
    }
}

/// All occurrences found within one paragraph, deduplicated by node id
/// within the paragraph (spec §4.1: "union of their outputs, deduplicated
/// by `type:normalize(label)` within the paragraph").
pub type ParagraphGroup = Vec<Occurrence>;
