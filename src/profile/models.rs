//! Data model for the singleton user profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points required to advance one level
const POINTS_PER_LEVEL: u32 = 100;

/// Level implied by a point total: level 1 at zero points, +1 per 100
pub fn level_for_points(points: u32) -> u32 {
    1 + points / POINTS_PER_LEVEL
}

/// Running statistics for the single local user
///
/// Created lazily with zeroed defaults on first use, mutated after every
/// interaction and quiz grading, persisted as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub total_messages: u32,
    /// Correctly answered quizzes; never exceeds `quiz_attempts`
    #[serde(default)]
    pub quiz_score: u32,
    #[serde(default)]
    pub quiz_attempts: u32,
    /// Distinct topic labels, in first-seen order
    #[serde(default)]
    pub topics: Vec<String>,
    /// When the most recent interaction was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_chat_date: Option<DateTime<Utc>>,
    /// Consecutive-day activity counter
    #[serde(default)]
    pub streak_days: u32,
    /// Distinct persona ids engaged, in first-seen order
    #[serde(default)]
    pub personalities_used: Vec<String>,
    #[serde(default)]
    pub total_points: u32,
    /// Derived: `1 + total_points / 100`, recomputed on each interaction
    #[serde(default = "default_level")]
    pub level: u32,
    /// Append-only: unlock ids are never removed
    #[serde(default)]
    pub unlocked_achievements: Vec<String>,
}

fn default_level() -> u32 {
    1
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            total_messages: 0,
            quiz_score: 0,
            quiz_attempts: 0,
            topics: Vec::new(),
            last_chat_date: None,
            streak_days: 0,
            personalities_used: Vec::new(),
            total_points: 0,
            level: 1,
            unlocked_achievements: Vec::new(),
        }
    }
}

impl UserProfile {
    /// Check whether an achievement id has already been unlocked
    pub fn has_achievement(&self, id: &str) -> bool {
        self.unlocked_achievements.iter().any(|a| a == id)
    }
}
