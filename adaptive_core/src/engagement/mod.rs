//! Engagement tracking - latency classification and windowed mood inference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use story_model::{ChoiceId, EngagementLevel, Mood, UserChoice};

/// Number of trailing choices considered when inferring the current mood.
pub const MOOD_WINDOW: usize = 5;

/// One logged interaction. Kept for observability only; classification and
/// inference never read the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub timestamp: DateTime<Utc>,
    pub response_time: f32,
    pub choice_id: ChoiceId,
}

/// Classifies response latency and infers a current mood from recent
/// choice history.
#[derive(Debug, Clone)]
pub struct EngagementTracker {
    interaction_log: Vec<Interaction>,

    /// Mood returned when there is no history to infer from. Set once at
    /// construction and never updated afterwards.
    fallback_mood: Mood,
}

impl EngagementTracker {
    /// Create a tracker with the default `Contemplative` fallback.
    pub fn new() -> Self {
        Self::with_fallback(Mood::Contemplative)
    }

    /// Create a tracker with an explicit fallback mood.
    pub fn with_fallback(fallback_mood: Mood) -> Self {
        Self {
            interaction_log: Vec::new(),
            fallback_mood,
        }
    }

    /// Log an interaction and classify its latency.
    ///
    /// Classification is a pure function of `response_time`; the log append
    /// is a side effect only.
    pub fn track_choice(&mut self, response_time: f32, choice_id: ChoiceId) -> EngagementLevel {
        self.interaction_log.push(Interaction {
            timestamp: Utc::now(),
            response_time,
            choice_id,
        });

        EngagementLevel::from_response_time(response_time)
    }

    /// Infer the user's current mood from their choice history.
    ///
    /// Sums mood impacts over the last [`MOOD_WINDOW`] choices and returns
    /// the mood with the highest total, ties broken by declaration order.
    /// An empty history returns the fallback mood. A non-empty window whose
    /// choices carry no impacts resolves to the first-declared mood.
    pub fn infer_mood(&self, choices: &[UserChoice]) -> Mood {
        if choices.is_empty() {
            return self.fallback_mood;
        }

        let window_start = choices.len().saturating_sub(MOOD_WINDOW);
        let window = &choices[window_start..];

        let mut best = Mood::ALL[0];
        let mut best_score = f32::NEG_INFINITY;

        for mood in Mood::ALL {
            let score: f32 = window
                .iter()
                .filter_map(|choice| choice.mood_impact.get(&mood))
                .sum();

            if score > best_score {
                best = mood;
                best_score = score;
            }
        }

        best
    }

    /// The configured fallback mood.
    pub fn fallback_mood(&self) -> Mood {
        self.fallback_mood
    }

    /// The full interaction log, oldest first.
    pub fn interaction_log(&self) -> &[Interaction] {
        &self.interaction_log
    }
}

impl Default for EngagementTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(impacts: &[(Mood, f32)]) -> UserChoice {
        UserChoice::new("test", 1.0, impacts.iter().copied().collect())
    }

    #[test]
    fn test_track_choice_classifies_latency() {
        let mut tracker = EngagementTracker::new();

        assert_eq!(
            tracker.track_choice(2.9, ChoiceId::new()),
            EngagementLevel::High
        );
        assert_eq!(
            tracker.track_choice(3.0, ChoiceId::new()),
            EngagementLevel::Medium
        );
        assert_eq!(
            tracker.track_choice(9.9, ChoiceId::new()),
            EngagementLevel::Medium
        );
        assert_eq!(
            tracker.track_choice(10.0, ChoiceId::new()),
            EngagementLevel::Low
        );

        assert_eq!(tracker.interaction_log().len(), 4);
    }

    #[test]
    fn test_infer_mood_empty_history_returns_fallback() {
        let tracker = EngagementTracker::new();
        assert_eq!(tracker.infer_mood(&[]), Mood::Contemplative);

        let tracker = EngagementTracker::with_fallback(Mood::Dark);
        assert_eq!(tracker.infer_mood(&[]), Mood::Dark);
    }

    #[test]
    fn test_infer_mood_picks_highest_sum() {
        let tracker = EngagementTracker::new();

        let history = vec![
            choice(&[(Mood::Dark, 0.4)]),
            choice(&[(Mood::Dark, 0.2), (Mood::Mysterious, 0.4)]),
            choice(&[(Mood::Mysterious, 0.1)]),
        ];

        // Dark: 0.6, Mysterious: 0.5
        assert_eq!(tracker.infer_mood(&history), Mood::Dark);
    }

    #[test]
    fn test_infer_mood_only_considers_last_five() {
        let tracker = EngagementTracker::new();

        // Five old dark choices followed by five romantic ones: the dark
        // ones fall outside the window.
        let mut history: Vec<_> = (0..5).map(|_| choice(&[(Mood::Dark, 1.0)])).collect();
        history.extend((0..5).map(|_| choice(&[(Mood::Romantic, 0.2)])));

        let full = tracker.infer_mood(&history);
        let windowed = tracker.infer_mood(&history[5..]);

        assert_eq!(full, Mood::Romantic);
        assert_eq!(full, windowed);
    }

    #[test]
    fn test_infer_mood_tie_breaks_by_declaration_order() {
        let tracker = EngagementTracker::new();

        // Tense and Mysterious tie; Mysterious is declared first.
        let history = vec![choice(&[(Mood::Tense, 0.4), (Mood::Mysterious, 0.4)])];
        assert_eq!(tracker.infer_mood(&history), Mood::Mysterious);
    }

    #[test]
    fn test_infer_mood_no_impacts_resolves_to_first_declared() {
        let tracker = EngagementTracker::new();

        let history = vec![choice(&[])];
        assert_eq!(tracker.infer_mood(&history), Mood::Adventurous);
    }
}
