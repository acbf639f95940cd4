use std::collections::HashMap;

use chrono::{DateTime, Utc};
use memcity_model::{edge_id, node_id, Edge, Node, ParagraphGroup};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::{GraphError, GraphResult};

/// Raw snapshot of the graph store: nodes and edges as they are held
/// internally, before the Decay & Weighting component attaches display
/// weights (spec §3/§4.2). Sources are materialized as ordered sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSnapshot {
    pub generation: u64,
    pub produced_at: DateTime<Utc>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// In-memory entity graph: an undirected graph of [`Node`]s connected by
/// paragraph-scoped [`Edge`]s, indexed by node id for O(1) upsert (spec
/// §4.2). Grounded on the `NetworkxEntityGraph` pattern of a petgraph
/// backing store plus a name→index map for fast lookups.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    graph: UnGraph<Node, Edge>,
    index: HashMap<String, NodeIndex>,
    generation: u64,
}

impl GraphStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Increments the mention count, refreshes `last_seen` to `now`, and
    /// adds `document` to the source set; creates the node if absent (spec
    /// §4.2).
    pub fn upsert_node(
        &mut self,
        entity_type: &str,
        label: &str,
        document: &str,
        now: DateTime<Utc>,
    ) -> &Node {
        let id = node_id(entity_type, label);
        let idx = if let Some(&idx) = self.index.get(&id) {
            self.graph[idx].record_occurrence(document, now);
            idx
        } else {
            let idx = self.graph.add_node(Node::new(entity_type, label, document, now));
            self.index.insert(id, idx);
            idx
        };
        &self.graph[idx]
    }

    /// Idempotent in structure: canonicalizes ordering, increments the
    /// co-occurrence count, refreshes `last_seen`; creates the edge if
    /// absent (spec §4.2). Fails if either endpoint is not already a node.
    pub fn upsert_edge(
        &mut self,
        id_a: &str,
        id_b: &str,
        now: DateTime<Utc>,
    ) -> GraphResult<&Edge> {
        let idx_a = *self
            .index
            .get(id_a)
            .ok_or_else(|| GraphError::DanglingEdgeEndpoint(id_a.to_string()))?;
        let idx_b = *self
            .index
            .get(id_b)
            .ok_or_else(|| GraphError::DanglingEdgeEndpoint(id_b.to_string()))?;

        if let Some(existing) = self.graph.find_edge(idx_a, idx_b) {
            let edge = &mut self.graph[existing];
            edge.record_occurrence(now);
            return Ok(&self.graph[existing]);
        }

        let edge = Edge::new(id_a, id_b, now);
        let new_idx = self.graph.add_edge(idx_a, idx_b, edge);
        Ok(&self.graph[new_idx])
    }

    /// Degree of the node with `id`, used by [`key_node_scores`](Self::key_node_scores).
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.index
            .get(id)
            .map(|&idx| self.graph.edges(idx).count())
            .unwrap_or(0)
    }

    /// `score = mention_count × √(edge_degree + 1)` for every node (spec
    /// §4.2's key-node scoring, for consumers that want a ranking).
    #[must_use]
    pub fn key_node_scores(&self) -> Vec<(String, f64)> {
        self.graph
            .node_indices()
            .map(|idx| {
                let node = &self.graph[idx];
                let degree = self.graph.edges(idx).count();
                let score = node.mention_count as f64 * ((degree + 1) as f64).sqrt();
                (node.id.clone(), score)
            })
            .collect()
    }

    /// Runs the extractor's output against the store: for each paragraph
    /// group, upserts every occurrence as a node, then upserts an edge for
    /// every unordered pair of distinct node ids in the group. Edges are
    /// paragraph-scoped (spec §4.2).
    pub fn ingest_paragraph_groups(
        &mut self,
        groups: &[ParagraphGroup],
        document: &str,
        now: DateTime<Utc>,
    ) {
        for group in groups {
            let ids: Vec<String> = group
                .iter()
                .map(|occ| {
                    self.upsert_node(&occ.entity_type, &occ.label, document, now);
                    occ.node_id()
                })
                .collect();

            for i in 0..ids.len() {
                for j in (i + 1)..ids.len() {
                    if ids[i] == ids[j] {
                        continue;
                    }
                    let _ = self.upsert_edge(&ids[i], &ids[j], now);
                }
            }
        }
    }

    /// Runs the extractor over `content` and ingests its paragraph groups
    /// (spec §4.2's "Algorithm for building from a document"). Propagates
    /// [`memcity_extract::ExtractError`] unchanged.
    pub fn ingest_document(
        &mut self,
        content: &str,
        document: &str,
        now: DateTime<Utc>,
    ) -> Result<(), memcity_extract::ExtractError> {
        let groups = memcity_extract::extract(content, document)?;
        self.ingest_paragraph_groups(&groups, document, now);
        Ok(())
    }

    /// Like [`Self::ingest_document`], but against a caller-supplied
    /// [`memcity_extract::Lexicons`] (e.g. one built from a loaded
    /// `memcity_config::Config`'s ticker whitelist/stoplist, spec §6).
    pub fn ingest_document_with_lexicons(
        &mut self,
        content: &str,
        document: &str,
        now: DateTime<Utc>,
        lexicons: &memcity_extract::Lexicons,
    ) -> Result<(), memcity_extract::ExtractError> {
        let groups = memcity_extract::extract_with_lexicons(content, document, lexicons)?;
        self.ingest_paragraph_groups(&groups, document, now);
        Ok(())
    }

    /// Atomic deep copy of the store's current nodes and edges, with the
    /// generation counter advanced (spec §4.2).
    pub fn snapshot(&mut self, produced_at: DateTime<Utc>) -> RawSnapshot {
        self.generation += 1;
        RawSnapshot {
            generation: self.generation,
            produced_at,
            nodes: self.graph.node_weights().cloned().collect(),
            edges: self.graph.edge_weights().cloned().collect(),
        }
    }

    /// Additive merge: mention counts sum, co-occurrence counts sum,
    /// `last_seen` takes the later, `first_seen` takes the earlier, source
    /// sets union (spec §4.2).
    pub fn merge(&mut self, other: &GraphStore) {
        for node in other.graph.node_weights() {
            let idx = if let Some(&idx) = self.index.get(node.id.as_str()) {
                idx
            } else {
                let idx = self.graph.add_node(Node::new(
                    &node.entity_type,
                    &node.label,
                    node.sources.first().map_or("", String::as_str),
                    node.first_seen,
                ));
                self.index.insert(node.id.clone(), idx);
                idx
            };
            self.graph[idx].merge_from(node);
        }

        for edge in other.graph.edge_weights() {
            let (Some(&idx_a), Some(&idx_b)) = (
                self.index.get(edge.source_id.as_str()),
                self.index.get(edge.target_id.as_str()),
            ) else {
                continue;
            };
            if let Some(existing) = self.graph.find_edge(idx_a, idx_b) {
                self.graph[existing].merge_from(edge);
            } else {
                self.graph.add_edge(idx_a, idx_b, edge.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use memcity_model::Occurrence;

    fn t(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn upsert_node_creates_then_increments() {
        let mut store = GraphStore::new();
        store.upsert_node("person", "Jane Doe", "doc.md", t(0));
        let node = store.upsert_node("person", "Jane Doe", "doc2.md", t(10));
        assert_eq!(node.mention_count, 2);
        assert_eq!(node.sources, vec!["doc.md".to_string(), "doc2.md".to_string()]);
        assert_eq!(store.node_count(), 1);
    }

    #[test]
    fn upsert_edge_requires_both_endpoints_to_exist() {
        let mut store = GraphStore::new();
        store.upsert_node("person", "Jane Doe", "doc.md", t(0));
        let id_a = node_id("person", "Jane Doe");
        let id_b = node_id("person", "Missing Person");
        assert!(store.upsert_edge(&id_a, &id_b, t(0)).is_err());
    }

    #[test]
    fn upsert_edge_canonicalizes_ordering_and_increments() {
        let mut store = GraphStore::new();
        store.upsert_node("person", "Alice", "doc.md", t(0));
        store.upsert_node("person", "Bob", "doc.md", t(0));
        let id_a = node_id("person", "Alice");
        let id_b = node_id("person", "Bob");

        store.upsert_edge(&id_a, &id_b, t(0)).unwrap();
        let edge = store.upsert_edge(&id_b, &id_a, t(5)).unwrap();
        assert_eq!(edge.co_occurrence_count, 2);
        assert_eq!(edge.id, edge_id(&id_a, &id_b));
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn ingest_paragraph_groups_links_every_pair_once() {
        let mut store = GraphStore::new();
        let group = vec![
            Occurrence::new("Alice", "person", 0, "doc.md"),
            Occurrence::new("Bob", "person", 0, "doc.md"),
            Occurrence::new("Carol", "person", 0, "doc.md"),
        ];
        store.ingest_paragraph_groups(&[group], "doc.md", t(0));
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 3);
    }

    #[test]
    fn ingest_document_runs_the_extractor_end_to_end() {
        let mut store = GraphStore::new();
        let content = "Jane Doe and **event sourcing** were the main topics of the call.";
        store.ingest_document(content, "notes/2026-01-01.md", t(0)).unwrap();
        assert!(store.node(&node_id("person", "Jane Doe")).is_some());
        assert!(store.node(&node_id("concept", "event sourcing")).is_some());
    }

    #[test]
    fn ingest_document_propagates_empty_content_error() {
        let mut store = GraphStore::new();
        assert!(store.ingest_document("", "doc.md", t(0)).is_err());
    }

    #[test]
    fn ingest_paragraph_groups_does_not_link_across_paragraphs() {
        let mut store = GraphStore::new();
        let group_a = vec![Occurrence::new("Alice", "person", 0, "doc.md")];
        let group_b = vec![Occurrence::new("Bob", "person", 1, "doc.md")];
        store.ingest_paragraph_groups(&[group_a, group_b], "doc.md", t(0));
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn key_node_scores_reward_mentions_and_degree() {
        let mut store = GraphStore::new();
        let group = vec![
            Occurrence::new("Alice", "person", 0, "doc.md"),
            Occurrence::new("Bob", "person", 0, "doc.md"),
        ];
        store.ingest_paragraph_groups(&[group], "doc.md", t(0));
        store.upsert_node("person", "Alice", "doc2.md", t(1));

        let scores: HashMap<_, _> = store.key_node_scores().into_iter().collect();
        let alice = scores[&node_id("person", "Alice")];
        let bob = scores[&node_id("person", "Bob")];
        assert!(alice > bob);
    }

    #[test]
    fn snapshot_advances_generation_and_copies_state() {
        let mut store = GraphStore::new();
        store.upsert_node("person", "Alice", "doc.md", t(0));
        let snap1 = store.snapshot(t(1));
        let snap2 = store.snapshot(t(2));
        assert_eq!(snap1.generation, 1);
        assert_eq!(snap2.generation, 2);
        assert_eq!(snap1.nodes.len(), 1);
    }

    #[test]
    fn merge_sums_mention_counts_and_unions_sources() {
        let mut a = GraphStore::new();
        a.upsert_node("person", "Alice", "doc-a.md", t(0));

        let mut b = GraphStore::new();
        b.upsert_node("person", "Alice", "doc-b.md", t(5));

        a.merge(&b);
        let alice = a.node(&node_id("person", "Alice")).unwrap();
        assert_eq!(alice.mention_count, 2);
        assert!(alice.sources.contains(&"doc-a.md".to_string()));
        assert!(alice.sources.contains(&"doc-b.md".to_string()));
    }

    #[test]
    fn merge_unions_edges_between_nodes_present_in_both() {
        let mut a = GraphStore::new();
        a.upsert_node("person", "Alice", "doc.md", t(0));
        a.upsert_node("person", "Bob", "doc.md", t(0));
        let id_a = node_id("person", "Alice");
        let id_b = node_id("person", "Bob");
        a.upsert_edge(&id_a, &id_b, t(0)).unwrap();

        let mut b = GraphStore::new();
        b.upsert_node("person", "Alice", "doc2.md", t(1));
        b.upsert_node("person", "Bob", "doc2.md", t(1));
        b.upsert_edge(&id_a, &id_b, t(1)).unwrap();

        a.merge(&b);
        let edge = a.node(&id_a).is_some();
        assert!(edge);
        assert_eq!(a.edge_count(), 1);
    }
}
