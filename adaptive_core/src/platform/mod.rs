//! Platform facade - the entry point the application layer calls per request.
//!
//! Owns the knowledge graph (shared across users), the engagement tracker,
//! the discovery engine, and the user profile store. Profiles are created
//! lazily on first touch for any user ID: queries for unknown users get a
//! fresh profile instead of an error. Callers wanting strict behavior can
//! check [`StorytellingPlatform::profile`] first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    analyze_choice_mood_impact, BranchingPath, DiscoveryConfig, DiscoveryEngine,
    EngagementTracker, KnowledgeGraph,
};
use story_model::{ChoiceId, EngagementLevel, Mood, Relationship, StoryElement, UserChoice, UserProfile};

/// The result of processing one user choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOutcome {
    pub choice_id: ChoiceId,
    pub engagement_level: EngagementLevel,
    pub inferred_mood: Mood,
}

/// The content-selection core, assembled.
pub struct StorytellingPlatform {
    graph: KnowledgeGraph,
    tracker: EngagementTracker,
    discovery: DiscoveryEngine,
    users: HashMap<String, UserProfile>,
}

impl StorytellingPlatform {
    /// Create a platform with an empty graph and default configuration.
    pub fn new() -> Self {
        Self::with_config(DiscoveryConfig::default())
    }

    /// Create a platform with explicit discovery configuration.
    pub fn with_config(config: DiscoveryConfig) -> Self {
        Self {
            graph: KnowledgeGraph::new(),
            tracker: EngagementTracker::new(),
            discovery: DiscoveryEngine::new(config),
            users: HashMap::new(),
        }
    }

    /// Bulk-load static element configuration.
    pub fn load_elements(&mut self, elements: Vec<StoryElement>) {
        self.graph.load_elements(elements);
    }

    /// Bulk-load static relationship configuration.
    pub fn load_relationships(&mut self, relationships: Vec<Relationship>) {
        self.graph.load_relationships(relationships);
    }

    /// Create a profile for a user, or return the existing one untouched.
    pub fn create_user(&mut self, user_id: &str) -> &UserProfile {
        profile_entry(&mut self.users, user_id)
    }

    /// Get a user's profile without creating one.
    pub fn profile(&self, user_id: &str) -> Option<&UserProfile> {
        self.users.get(user_id)
    }

    /// Process one user choice end to end.
    ///
    /// Analyzes the choice text's mood impact, appends the choice to the
    /// user's profile (creating it if needed), classifies engagement from
    /// the response latency, and infers the current mood from the updated
    /// history.
    pub fn process_choice(
        &mut self,
        user_id: &str,
        choice_text: &str,
        response_time: f32,
    ) -> ChoiceOutcome {
        let mood_impact = analyze_choice_mood_impact(choice_text);
        let choice = UserChoice::new(choice_text, response_time, mood_impact);
        let choice_id = choice.choice_id;

        let profile = profile_entry(&mut self.users, user_id);
        profile.add_choice(choice);

        let engagement_level = self.tracker.track_choice(response_time, choice_id);
        let inferred_mood = self.tracker.infer_mood(&profile.choice_history);

        debug!(
            user_id,
            %choice_id,
            ?engagement_level,
            %inferred_mood,
            "processed choice"
        );

        ChoiceOutcome {
            choice_id,
            engagement_level,
            inferred_mood,
        }
    }

    /// Recommend fresh content for a user's accumulated preferences.
    pub fn get_recommendations(&mut self, user_id: &str) -> Vec<StoryElement> {
        let profile = profile_entry(&mut self.users, user_id);
        self.discovery.recommend_content(&self.graph, profile)
    }

    /// Suggest ranked story branches out of an element for a user.
    ///
    /// Unknown element IDs yield no paths.
    pub fn get_branching_paths(&mut self, element_id: &str, user_id: &str) -> Vec<BranchingPath> {
        let profile = profile_entry(&mut self.users, user_id);
        self.discovery
            .suggest_branching_paths(&self.graph, element_id, profile)
    }

    /// The user's currently inferred mood, without processing a new choice.
    pub fn current_mood(&mut self, user_id: &str) -> Mood {
        let profile = profile_entry(&mut self.users, user_id);
        self.tracker.infer_mood(&profile.choice_history)
    }

    /// Record that an element's content was actually shown to the user.
    ///
    /// The renderer must call this after presenting content, or freshness
    /// accounting drifts. Returns false for unknown IDs.
    pub fn mark_used(&mut self, element_id: &str) -> bool {
        self.graph.mark_used(element_id)
    }

    /// The underlying knowledge graph.
    pub fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }
}

/// Get-or-create on the profile store. A free function over the map field so
/// callers can keep borrowing the platform's other fields.
fn profile_entry<'a>(
    users: &'a mut HashMap<String, UserProfile>,
    user_id: &str,
) -> &'a mut UserProfile {
    users
        .entry(user_id.to_string())
        .or_insert_with_key(|id| UserProfile::new(id.clone()))
}

impl Default for StorytellingPlatform {
    fn default() -> Self {
        Self::new()
    }
}
