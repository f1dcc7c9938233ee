//! Preference scoring for ranked content selection.

use story_model::{StoryElement, UserProfile};

/// Score an element against a user's accumulated preferences.
///
/// The first term rewards alignment between the element's mood weights and
/// the user's preference vector; the second is a linear freshness bonus
/// that shrinks with each prior use and floors at zero.
pub fn preference_score(
    element: &StoryElement,
    profile: &UserProfile,
    freshness_decay: f32,
) -> f32 {
    let alignment: f32 = element
        .mood_weights
        .iter()
        .map(|(&mood, &weight)| weight * profile.preference(mood))
        .sum();

    let freshness_bonus = (1.0 - element.usage_count as f32 * freshness_decay).max(0.0);

    alignment + freshness_bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::{Mood, UserChoice};

    const DECAY: f32 = 0.2;

    fn profile_with_preference(mood: Mood, preference: f32) -> UserProfile {
        let mut profile = UserProfile::new("test_user");
        let mut remaining = preference / 0.1;
        while remaining > 0.0 {
            let impact = remaining.min(1.0);
            profile.add_choice(UserChoice::new(
                "test",
                1.0,
                [(mood, impact)].into_iter().collect(),
            ));
            remaining -= impact;
        }
        profile
    }

    #[test]
    fn test_score_rewards_mood_alignment() {
        let profile = profile_with_preference(Mood::Dark, 0.5);

        let aligned = StoryElement::new("a", "item", "x").with_mood_weight(Mood::Dark, 0.8);
        let unaligned =
            StoryElement::new("b", "item", "y").with_mood_weight(Mood::Romantic, 0.8);

        let aligned_score = preference_score(&aligned, &profile, DECAY);
        let unaligned_score = preference_score(&unaligned, &profile, DECAY);

        // 0.8 * 0.5 + 1.0 vs 0.0 + 1.0
        assert!((aligned_score - 1.4).abs() < 0.001);
        assert!((unaligned_score - 1.0).abs() < 0.001);
        assert!(aligned_score > unaligned_score);
    }

    #[test]
    fn test_freshness_bonus_decays_linearly() {
        let profile = UserProfile::new("u");
        let mut element = StoryElement::new("a", "item", "x");

        assert!((preference_score(&element, &profile, DECAY) - 1.0).abs() < 0.001);

        element.mark_used();
        assert!((preference_score(&element, &profile, DECAY) - 0.8).abs() < 0.001);

        element.mark_used();
        assert!((preference_score(&element, &profile, DECAY) - 0.6).abs() < 0.001);
    }

    #[test]
    fn test_freshness_bonus_floors_at_zero() {
        let profile = UserProfile::new("u");
        let mut element = StoryElement::new("a", "item", "x");
        element.usage_count = 5;

        assert_eq!(preference_score(&element, &profile, DECAY), 0.0);

        // Well past the floor it must never go negative.
        element.usage_count = 20;
        assert_eq!(preference_score(&element, &profile, DECAY), 0.0);
    }

    #[test]
    fn test_score_is_monotonic_in_preference() {
        let element = StoryElement::new("a", "item", "x").with_mood_weight(Mood::Tense, 0.9);

        let weak = profile_with_preference(Mood::Tense, 0.2);
        let strong = profile_with_preference(Mood::Tense, 0.8);

        assert!(
            preference_score(&element, &strong, DECAY)
                > preference_score(&element, &weak, DECAY)
        );
    }
}
