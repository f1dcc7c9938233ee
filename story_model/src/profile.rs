//! User profiles - per-user choice history and accumulated mood preferences.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Mood, UserChoice};

/// Gain applied to each mood impact when folding a choice into the
/// preference vector.
pub const PREFERENCE_GAIN: f32 = 0.1;

/// Per-user accumulating state.
///
/// The choice history is append-only and chronological; any windowing
/// happens at query time, never at storage time. The preference vector is a
/// running sum with no decay and no cap: it is a pure, order-independent
/// function of the multiset of (mood, impact) pairs ever added, and it grows
/// without bound over a long session. Lifetime affinity tracking, not a
/// normalized distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,

    /// Every choice this user has made, in insertion order.
    pub choice_history: Vec<UserChoice>,

    /// Mood -> accumulated preference score. Keyed by the enum throughout;
    /// invalid mood names are rejected at the serde boundary.
    pub narrative_preferences: HashMap<Mood, f32>,
}

impl UserProfile {
    /// Create an empty profile for a user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            choice_history: Vec::new(),
            narrative_preferences: HashMap::new(),
        }
    }

    /// Append a choice and fold its mood impact into the preference vector.
    ///
    /// This is the only mutator of `narrative_preferences`.
    pub fn add_choice(&mut self, choice: UserChoice) {
        for (&mood, &impact) in &choice.mood_impact {
            *self.narrative_preferences.entry(mood).or_insert(0.0) +=
                impact * PREFERENCE_GAIN;
        }
        self.choice_history.push(choice);
    }

    /// The user's accumulated preference for a mood, 0.0 when absent.
    pub fn preference(&self, mood: Mood) -> f32 {
        self.narrative_preferences.get(&mood).copied().unwrap_or(0.0)
    }

    /// The last `n` choices, oldest first. Fewer if the history is shorter.
    pub fn recent_choices(&self, n: usize) -> &[UserChoice] {
        let start = self.choice_history.len().saturating_sub(n);
        &self.choice_history[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn choice_with_impact(impacts: &[(Mood, f32)]) -> UserChoice {
        UserChoice::new("test", 1.0, impacts.iter().copied().collect())
    }

    #[test]
    fn test_preferences_accumulate() {
        let mut profile = UserProfile::new("user_1");

        profile.add_choice(choice_with_impact(&[(Mood::Adventurous, 0.2)]));
        profile.add_choice(choice_with_impact(&[(Mood::Adventurous, 0.4)]));

        // 0.2 * 0.1 + 0.4 * 0.1
        assert!((profile.preference(Mood::Adventurous) - 0.06).abs() < 0.001);
        assert_eq!(profile.choice_history.len(), 2);
    }

    #[test]
    fn test_preferences_are_order_independent() {
        let choices = [
            choice_with_impact(&[(Mood::Dark, 0.6), (Mood::Tense, 0.2)]),
            choice_with_impact(&[(Mood::Dark, 0.2)]),
            choice_with_impact(&[(Mood::Mysterious, 1.0)]),
        ];

        let mut forward = UserProfile::new("a");
        for choice in choices.iter().cloned() {
            forward.add_choice(choice);
        }

        let mut backward = UserProfile::new("b");
        for choice in choices.iter().rev().cloned() {
            backward.add_choice(choice);
        }

        for mood in Mood::ALL {
            assert!(
                (forward.preference(mood) - backward.preference(mood)).abs() < 0.0001,
                "preference for {} differs by insertion order",
                mood
            );
        }
    }

    #[test]
    fn test_unseen_mood_preference_is_zero() {
        let profile = UserProfile::new("user_1");
        assert_eq!(profile.preference(Mood::Humorous), 0.0);
    }

    #[test]
    fn test_recent_choices_window() {
        let mut profile = UserProfile::new("user_1");
        for i in 0..8 {
            profile.add_choice(UserChoice::new(
                format!("choice {}", i),
                1.0,
                HashMap::new(),
            ));
        }

        let recent = profile.recent_choices(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].choice_text, "choice 3");
        assert_eq!(recent[4].choice_text, "choice 7");

        assert_eq!(profile.recent_choices(20).len(), 8);
    }
}
