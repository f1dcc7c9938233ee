//! Choice text analysis - keyword-based mood impact scoring.
//!
//! Each matched keyword contributes a fixed impact, summed per mood and
//! capped at 1.0. Matching is case-insensitive substring containment, so
//! "discovering" triggers "discover". Two moods (`Contemplative`, `Tense`)
//! have no keyword triggers; the reference keyword table leaves them
//! uncovered and we keep that gap.

use std::collections::HashMap;

use story_model::Mood;

/// Impact contributed by a single keyword match.
const KEYWORD_IMPACT: f32 = 0.2;

/// Per-mood impact cap.
const IMPACT_CAP: f32 = 1.0;

/// The fixed keyword table. Five keywords per covered mood.
const MOOD_KEYWORDS: [(Mood, [&str; 5]); 5] = [
    (
        Mood::Adventurous,
        ["explore", "adventure", "quest", "journey", "discover"],
    ),
    (
        Mood::Mysterious,
        ["investigate", "mystery", "secret", "hidden", "unknown"],
    ),
    (
        Mood::Romantic,
        ["love", "romance", "heart", "kiss", "together"],
    ),
    (Mood::Dark, ["fight", "battle", "dark", "evil", "danger"]),
    (
        Mood::Humorous,
        ["joke", "funny", "laugh", "silly", "amusing"],
    ),
];

/// Score a raw choice text against the keyword table.
///
/// Moods with no matches are omitted from the result; every impact present
/// is in `(0, 1]`.
pub fn analyze_choice_mood_impact(choice_text: &str) -> HashMap<Mood, f32> {
    let lowered = choice_text.to_lowercase();
    let mut mood_impact = HashMap::new();

    for (mood, keywords) in MOOD_KEYWORDS {
        let impact: f32 = keywords
            .iter()
            .filter(|keyword| lowered.contains(**keyword))
            .map(|_| KEYWORD_IMPACT)
            .sum();

        if impact > 0.0 {
            mood_impact.insert(mood, impact.min(IMPACT_CAP));
        }
    }

    mood_impact
}
