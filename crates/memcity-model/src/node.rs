use crate::error::{ModelError, ModelResult};
use crate::ids::node_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A node's entity type tag, e.g. `"ticker"`, `"person"`, `"tool"`.
///
/// Kept as a string rather than a closed enum: the half-life and district
/// keyword tables key on this value and are externally configurable
/// (spec §4.3, §6), so new type tags can appear without a code change.
pub type EntityType = String;

/// A node in the knowledge graph: a distinct entity mentioned in one or more
/// memory documents.
///
/// Id is `type:normalize(label)`, injective per the invariant in spec §3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub mention_count: i64,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Ordered (by first insertion) set of document paths that mention this
    /// node at least once.
    pub sources: Vec<String>,
}

impl Node {
    /// Create a freshly-seen node with mention count 1.
    #[must_use]
    pub fn new(entity_type: impl Into<String>, label: &str, document: &str, now: DateTime<Utc>) -> Self {
        let entity_type = entity_type.into();
        Self {
            id: node_id(&entity_type, label),
            label: label.to_string(),
            entity_type,
            mention_count: 1,
            first_seen: now,
            last_seen: now,
            sources: vec![document.to_string()],
        }
    }

    /// Record another occurrence of this node: bump the mention count,
    /// refresh `last_seen`, and add `document` to the source set if new.
    pub fn record_occurrence(&mut self, document: &str, now: DateTime<Utc>) {
        self.mention_count += 1;
        if now > self.last_seen {
            self.last_seen = now;
        }
        if !self.sources.iter().any(|s| s == document) {
            self.sources.push(document.to_string());
        }
    }

    /// Additive merge used by `GraphStore::merge` (spec §4.2): counts sum,
    /// `last_seen` takes the later, `first_seen` takes the earlier, source
    /// sets union (preserving `self`'s order, then any new entries).
    pub fn merge_from(&mut self, other: &Node) {
        self.mention_count += other.mention_count;
        if other.first_seen < self.first_seen {
            self.first_seen = other.first_seen;
        }
        if other.last_seen > self.last_seen {
            self.last_seen = other.last_seen;
        }
        for s in &other.sources {
            if !self.sources.iter().any(|existing| existing == s) {
                self.sources.push(s.clone());
            }
        }
    }

    /// Validate the invariants spec §3 states for a node. Called at
    /// snapshot-publication time (spec §4.4's "invariants are re-checked
    /// before publication"), never on the hot upsert path.
    pub fn validate(&self) -> ModelResult<()> {
        if self.mention_count < 1 {
            return Err(ModelError::NonPositiveMentionCount(self.mention_count));
        }
        if self.first_seen > self.last_seen {
            return Err(ModelError::SeenOrderViolation {
                first_seen_ms: self.first_seen.timestamp_millis(),
                last_seen_ms: self.last_seen.timestamp_millis(),
            });
        }
        if self.sources.is_empty() {
            return Err(ModelError::EmptySourceSet(self.id.clone()));
        }
        Ok(())
    }

    /// Unique source set as an ordered `BTreeSet`, useful for deterministic
    /// comparisons in tests.
    #[must_use]
    pub fn source_set(&self) -> BTreeSet<&str> {
        self.sources.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn new_node_has_mention_count_one() {
        let n = Node::new("ticker", "NVDA", "memory/a.md", t(0));
        assert_eq!(n.mention_count, 1);
        assert_eq!(n.sources, vec!["memory/a.md".to_string()]);
        assert_eq!(n.id, "ticker:nvda");
    }

    #[test]
    fn record_occurrence_increments_and_refreshes() {
        let mut n = Node::new("ticker", "NVDA", "memory/a.md", t(0));
        n.record_occurrence("memory/a.md", t(1000));
        assert_eq!(n.mention_count, 2);
        assert_eq!(n.last_seen, t(1000));
        // same source, not duplicated
        assert_eq!(n.sources.len(), 1);
    }

    #[test]
    fn record_occurrence_adds_new_source() {
        let mut n = Node::new("ticker", "NVDA", "memory/a.md", t(0));
        n.record_occurrence("memory/b.md", t(500));
        assert_eq!(n.sources, vec!["memory/a.md", "memory/b.md"]);
    }

    #[test]
    fn merge_sums_counts_and_widens_window() {
        let mut a = Node::new("ticker", "NVDA", "memory/a.md", t(100));
        a.record_occurrence("memory/a.md", t(200));
        let b = Node::new("ticker", "NVDA", "memory/b.md", t(50));

        a.merge_from(&b);
        assert_eq!(a.mention_count, 3);
        assert_eq!(a.first_seen, t(50));
        assert_eq!(a.last_seen, t(200));
        assert_eq!(a.source_set().len(), 2);
    }

    #[test]
    fn validate_rejects_seen_order_violation() {
        let mut n = Node::new("ticker", "NVDA", "memory/a.md", t(100));
        n.first_seen = t(200);
        n.last_seen = t(100);
        assert!(matches!(
            n.validate(),
            Err(ModelError::SeenOrderViolation { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_sources() {
        let mut n = Node::new("ticker", "NVDA", "memory/a.md", t(0));
        n.sources.clear();
        assert!(matches!(n.validate(), Err(ModelError::EmptySourceSet(_))));
    }

    #[test]
    fn validate_accepts_well_formed_node() {
        let n = Node::new("ticker", "NVDA", "memory/a.md", t(0));
        assert!(n.validate().is_ok());
    }
}
