//! Story elements - reusable narrative fragments in the knowledge graph.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::Mood;

/// A narrative fragment: a character, location, item, or similar.
///
/// Elements carry per-mood affinity weights used for scoring and a usage
/// counter that drives the freshness penalty. Everything except
/// `usage_count` is read-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryElement {
    /// Unique stable identifier, assigned at creation and never reused.
    pub element_id: String,

    /// Free-form category tag ("character", "location", "item", ...).
    /// Used only for filtering, never for dispatch.
    pub element_type: String,

    /// The literal text substituted into templates.
    pub content: String,

    /// Free-form style tags (e.g. "formal", "casual").
    pub tags: HashSet<String>,

    /// Mood -> weight in [0, 1]. Missing moods implicitly weight 0.
    pub mood_weights: HashMap<Mood, f32>,

    /// How many times this element has been shown to a user.
    pub usage_count: u32,
}

impl StoryElement {
    /// Create a new element with no tags or mood weights.
    pub fn new(
        element_id: impl Into<String>,
        element_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            element_type: element_type.into(),
            content: content.into(),
            tags: HashSet::new(),
            mood_weights: HashMap::new(),
            usage_count: 0,
        }
    }

    /// Add a style tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Set the affinity weight for a mood, clamped to [0, 1].
    pub fn with_mood_weight(mut self, mood: Mood, weight: f32) -> Self {
        self.mood_weights.insert(mood, weight.clamp(0.0, 1.0));
        self
    }

    /// The element's weight for a mood, 0.0 when absent.
    pub fn mood_weight(&self, mood: Mood) -> f32 {
        self.mood_weights.get(&mood).copied().unwrap_or(0.0)
    }

    /// Check for a style tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Record that this element's content was actually shown to a user.
    pub fn mark_used(&mut self) {
        self.usage_count += 1;
    }
}

/// A directed, typed edge between two story elements.
///
/// The graph stores at most one relationship per ordered `(from, to)` pair;
/// a later write for the same pair replaces the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from_id: String,
    pub to_id: String,
    pub label: String,
}

impl Relationship {
    pub fn new(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            label: label.into(),
        }
    }
}
