//! User choice records - the immutable inputs to preference tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::Mood;

/// Unique identifier for user choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceId(pub Uuid);

impl ChoiceId {
    /// Create a new random choice ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user interaction, immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserChoice {
    pub choice_id: ChoiceId,

    /// The raw text of the option the user picked.
    pub choice_text: String,

    /// When the choice was made.
    pub timestamp: DateTime<Utc>,

    /// Response latency in seconds.
    pub response_time: f32,

    /// Mood -> impact in (0, 1]. Only moods with nonzero impact are present.
    pub mood_impact: HashMap<Mood, f32>,
}

impl UserChoice {
    /// Create a choice record timestamped now.
    pub fn new(
        choice_text: impl Into<String>,
        response_time: f32,
        mood_impact: HashMap<Mood, f32>,
    ) -> Self {
        Self {
            choice_id: ChoiceId::new(),
            choice_text: choice_text.into(),
            timestamp: Utc::now(),
            response_time,
            mood_impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_choice_ids_are_unique() {
        let a = UserChoice::new("go left", 1.0, HashMap::new());
        let b = UserChoice::new("go left", 1.0, HashMap::new());
        assert_ne!(a.choice_id, b.choice_id);
    }

    #[test]
    fn test_choice_holds_impact() {
        let mut impact = HashMap::new();
        impact.insert(Mood::Dark, 0.4);

        let choice = UserChoice::new("fight the shadow", 2.0, impact);
        assert_eq!(choice.mood_impact.get(&Mood::Dark), Some(&0.4));
        assert_eq!(choice.mood_impact.get(&Mood::Romantic), None);
    }
}
