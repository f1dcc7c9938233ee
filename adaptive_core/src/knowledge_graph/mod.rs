//! Knowledge graph - storage and queries for story elements and relationships.
//!
//! The graph holds narrative fragments keyed by element ID plus an
//! insertion-ordered list of directed typed edges. It is read-mostly after
//! startup: only `usage_count` mutates, through [`KnowledgeGraph::mark_used`].
//! Lookups by unknown ID or mood return empty results, never errors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use story_model::{Mood, Relationship, StoryElement};

/// The story element graph shared across all users.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KnowledgeGraph {
    /// All elements by ID.
    nodes: HashMap<String, StoryElement>,

    /// Directed edges in insertion order. At most one edge per ordered
    /// `(from, to)` pair; a later write replaces the label in place.
    edges: Vec<Relationship>,
}

impl KnowledgeGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an element by its ID. Last write wins.
    pub fn add_element(&mut self, element: StoryElement) {
        self.nodes.insert(element.element_id.clone(), element);
    }

    /// Insert or replace the relationship for an ordered `(from, to)` pair.
    ///
    /// A replaced edge keeps its original position in insertion order.
    pub fn add_relationship(
        &mut self,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        label: impl Into<String>,
    ) {
        let relationship = Relationship::new(from_id, to_id, label);

        if let Some(existing) = self
            .edges
            .iter_mut()
            .find(|e| e.from_id == relationship.from_id && e.to_id == relationship.to_id)
        {
            existing.label = relationship.label;
        } else {
            self.edges.push(relationship);
        }
    }

    /// Bulk-load static element configuration.
    pub fn load_elements(&mut self, elements: Vec<StoryElement>) {
        for element in elements {
            self.add_element(element);
        }
    }

    /// Bulk-load static relationship configuration.
    pub fn load_relationships(&mut self, relationships: Vec<Relationship>) {
        for rel in relationships {
            self.add_relationship(rel.from_id, rel.to_id, rel.label);
        }
    }

    /// Elements reachable from `element_id` via a direct outgoing edge, in
    /// edge insertion order, optionally filtered by relationship label.
    ///
    /// Edges pointing at an ID not present in the node set are skipped.
    /// Unknown source IDs yield an empty vec.
    pub fn get_related_elements(
        &self,
        element_id: &str,
        relationship_type: Option<&str>,
    ) -> Vec<&StoryElement> {
        self.edges
            .iter()
            .filter(|edge| edge.from_id == element_id)
            .filter(|edge| relationship_type.map_or(true, |label| edge.label == label))
            .filter_map(|edge| self.nodes.get(&edge.to_id))
            .collect()
    }

    /// Every element whose weight for `mood` is at or above `threshold`,
    /// sorted by element ID so a fixed graph state always yields the same
    /// order. Read-only.
    pub fn find_elements_by_mood(&self, mood: Mood, threshold: f32) -> Vec<&StoryElement> {
        let mut matches: Vec<_> = self
            .nodes
            .values()
            .filter(|element| element.mood_weight(mood) >= threshold)
            .collect();

        matches.sort_by(|a, b| a.element_id.cmp(&b.element_id));
        matches
    }

    /// Get an element by ID.
    pub fn element(&self, element_id: &str) -> Option<&StoryElement> {
        self.nodes.get(element_id)
    }

    /// Increment an element's usage counter.
    ///
    /// Returns false for unknown IDs. This is the renderer contract: call it
    /// after an element's content was actually shown to the user, so the
    /// freshness accounting stays correct.
    pub fn mark_used(&mut self, element_id: &str) -> bool {
        match self.nodes.get_mut(element_id) {
            Some(element) => {
                element.mark_used();
                true
            }
            None => false,
        }
    }

    /// Total number of elements.
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.edges.len()
    }
}
