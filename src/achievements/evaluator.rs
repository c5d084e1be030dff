//! Unlock evaluation with once-only point awards

use chrono::{DateTime, Local, Timelike};

use super::catalog::CATALOG;
use crate::profile::UserProfile;

/// Check every catalog entry against the current profile state
///
/// An entry unlocks when its predicate holds and its id is not already in
/// the profile: the id is appended, its points added to the total, and its
/// display name collected. Unlocking is idempotent thereafter; calling this
/// again with unchanged state returns an empty list and awards nothing.
pub fn evaluate(profile: &mut UserProfile, now: DateTime<Local>) -> Vec<String> {
    let hour = now.hour();
    let mut newly_unlocked = Vec::new();

    for achievement in CATALOG {
        if (achievement.unlocked)(profile, hour) && !profile.has_achievement(achievement.id) {
            profile.unlocked_achievements.push(achievement.id.to_string());
            profile.total_points += achievement.points;
            newly_unlocked.push(achievement.name.to_string());
            log::debug!("Unlocked achievement {}", achievement.id);
        }
    }

    newly_unlocked
}
