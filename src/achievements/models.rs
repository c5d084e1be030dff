//! Data model for the achievement catalog

use crate::profile::UserProfile;

/// A single unlockable milestone
///
/// The predicate sees the current profile plus the evaluation-time hour of
/// day; time-of-day unlocks are transient truths re-checked on every call.
pub struct Achievement {
    /// Stable identifier, part of the persisted format
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Points awarded once, at unlock time
    pub points: u32,
    pub unlocked: fn(&UserProfile, u32) -> bool,
}
