//! The mood taxonomy - the scoring dimension used throughout the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of emotional categories driving content selection.
///
/// Declaration order is the canonical deterministic order: [`Mood::ALL`]
/// exposes it, and every tie-break in the engine resolves to the
/// first-declared mood.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Adventurous,
    Mysterious,
    Romantic,
    Dark,
    Humorous,
    Contemplative,
    Tense,
}

impl Mood {
    /// All moods in declaration order.
    pub const ALL: [Mood; 7] = [
        Mood::Adventurous,
        Mood::Mysterious,
        Mood::Romantic,
        Mood::Dark,
        Mood::Humorous,
        Mood::Contemplative,
        Mood::Tense,
    ];

    /// Lowercase string name of the mood.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Adventurous => "adventurous",
            Mood::Mysterious => "mysterious",
            Mood::Romantic => "romantic",
            Mood::Dark => "dark",
            Mood::Humorous => "humorous",
            Mood::Contemplative => "contemplative",
            Mood::Tense => "tense",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error raised when a string is not one of the seven mood names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid mood")]
pub struct ParseMoodError(pub String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| ParseMoodError(s.to_string()))
    }
}

/// Coarse classification of how quickly a user responded to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    /// Classify a response latency in seconds.
    ///
    /// Under 3 seconds is high, under 10 is medium, anything slower is low.
    /// Negative or zero latencies count as very fast responses.
    pub fn from_response_time(seconds: f32) -> Self {
        if seconds < 3.0 {
            EngagementLevel::High
        } else if seconds < 10.0 {
            EngagementLevel::Medium
        } else {
            EngagementLevel::Low
        }
    }
}
