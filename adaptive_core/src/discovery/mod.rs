//! Discovery engine - preference-driven recommendation and path ranking.
//!
//! Ranking works as follows:
//! 1. **Qualify**: Find the moods the user has accumulated real preference for
//! 2. **Query**: Pull elements at or above the mood weight threshold from the graph
//! 3. **Filter**: Drop overused content (freshness limit)
//! 4. **Score**: Combine preference alignment with a freshness bonus
//! 5. **Rank**: Sort descending by score, ties broken by element ID

mod scoring;

pub use scoring::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::KnowledgeGraph;
use story_model::{Mood, StoryElement, UserProfile};

/// Configuration for recommendation and branching-path ranking.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Minimum accumulated preference for a mood to qualify for
    /// recommendations.
    pub preference_threshold: f32,

    /// Minimum element mood weight used when querying the graph.
    pub mood_threshold: f32,

    /// Elements used this many times or more are no longer "fresh" and are
    /// excluded from recommendations.
    pub freshness_limit: u32,

    /// How many elements to take per qualifying mood.
    pub per_mood_limit: usize,

    /// Global cap on returned recommendations.
    pub max_recommendations: usize,

    /// How many branching paths to suggest.
    pub max_paths: usize,

    /// Freshness bonus lost per prior use; the bonus floors at zero.
    pub freshness_decay: f32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            preference_threshold: 0.3,
            mood_threshold: 0.5,
            freshness_limit: 3,
            per_mood_limit: 2,
            max_recommendations: 5,
            max_paths: 3,
            freshness_decay: 0.2,
        }
    }
}

/// A suggested story branch: a display label plus the element behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchingPath {
    pub label: String,
    pub element: StoryElement,
}

/// Selects and ranks graph content for a user.
pub struct DiscoveryEngine {
    config: DiscoveryConfig,
}

impl DiscoveryEngine {
    /// Create a discovery engine with the given configuration.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Create a discovery engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(DiscoveryConfig::default())
    }

    /// Recommend fresh content matching the user's accumulated preferences.
    ///
    /// For each mood (in declaration order) whose preference exceeds the
    /// threshold, takes the first few sufficiently-weighted fresh elements,
    /// then truncates to the global cap. An element matching two qualifying
    /// moods can appear twice: there is no cross-mood de-duplication.
    /// Ranking never touches `usage_count`.
    pub fn recommend_content(
        &self,
        graph: &KnowledgeGraph,
        profile: &UserProfile,
    ) -> Vec<StoryElement> {
        let mut recommendations = Vec::new();

        for mood in Mood::ALL {
            if profile.preference(mood) <= self.config.preference_threshold {
                continue;
            }

            let fresh = graph
                .find_elements_by_mood(mood, self.config.mood_threshold)
                .into_iter()
                .filter(|element| element.usage_count < self.config.freshness_limit)
                .take(self.config.per_mood_limit)
                .cloned();

            recommendations.extend(fresh);
        }

        recommendations.truncate(self.config.max_recommendations);

        debug!(
            user_id = %profile.user_id,
            count = recommendations.len(),
            "produced recommendations"
        );

        recommendations
    }

    /// Suggest the best-scoring story branches out of an element.
    ///
    /// Considers every directly related element regardless of relationship
    /// type, scores each against the profile, and returns the top few as
    /// labelled paths. Ties sort by element ID so identical state always
    /// ranks identically. Unknown element IDs yield no paths.
    pub fn suggest_branching_paths(
        &self,
        graph: &KnowledgeGraph,
        element_id: &str,
        profile: &UserProfile,
    ) -> Vec<BranchingPath> {
        let mut scored: Vec<(f32, &StoryElement)> = graph
            .get_related_elements(element_id, None)
            .into_iter()
            .map(|element| {
                (
                    preference_score(element, profile, self.config.freshness_decay),
                    element,
                )
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.element_id.cmp(&b.1.element_id))
        });

        scored
            .into_iter()
            .take(self.config.max_paths)
            .map(|(_, element)| BranchingPath {
                label: format!("Path to {}", element.content),
                element: element.clone(),
            })
            .collect()
    }

    /// The active configuration.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }
}
