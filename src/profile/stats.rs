//! Session statistics aggregation
//!
//! Pure mutations over the profile; persistence stays with the caller so
//! each recorded interaction ends up as one profile write.

use chrono::{DateTime, Utc};

use super::models::{level_for_points, UserProfile};

/// Fold one interaction into the profile
///
/// Increments the message counter, records novel topic and persona labels,
/// advances the day streak, and recomputes the derived level.
pub fn record_interaction(
    profile: &mut UserProfile,
    topic: Option<&str>,
    personality: Option<&str>,
    now: DateTime<Utc>,
) {
    profile.total_messages += 1;

    if let Some(topic) = topic {
        if !profile.topics.iter().any(|t| t == topic) {
            profile.topics.push(topic.to_string());
        }
    }

    if let Some(persona) = personality {
        if !profile.personalities_used.iter().any(|p| p == persona) {
            profile.personalities_used.push(persona.to_string());
        }
    }

    // Streak update over calendar days. A gap of exactly one day extends the
    // streak, a longer gap restarts it at 1. A same-day repeat matches
    // neither branch and leaves the counter untouched; only the very first
    // interaction ever sets it to 1.
    let today = now.date_naive();
    match profile.last_chat_date {
        Some(last) => {
            let gap = (today - last.date_naive()).num_days();
            if gap == 1 {
                profile.streak_days += 1;
            } else if gap > 1 {
                profile.streak_days = 1;
            }
        }
        None => profile.streak_days = 1,
    }
    profile.last_chat_date = Some(now);

    profile.level = level_for_points(profile.total_points);
}

/// Fold one graded quiz answer into the profile
pub fn record_quiz_result(profile: &mut UserProfile, correct: bool) {
    profile.quiz_attempts += 1;
    if correct {
        profile.quiz_score += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_first_interaction_starts_streak() {
        let mut profile = UserProfile::default();
        let now = Utc::now();

        record_interaction(&mut profile, Some("Science"), None, now);

        assert_eq!(profile.total_messages, 1);
        assert_eq!(profile.streak_days, 1);
        assert_eq!(profile.topics, vec!["Science"]);
        assert_eq!(profile.last_chat_date, Some(now));
    }

    #[test]
    fn test_next_day_increments_streak() {
        let mut profile = UserProfile {
            streak_days: 4,
            last_chat_date: Some(Utc::now() - Duration::days(1)),
            ..Default::default()
        };

        record_interaction(&mut profile, None, None, Utc::now());
        assert_eq!(profile.streak_days, 5);
    }

    #[test]
    fn test_multi_day_gap_resets_streak() {
        let mut profile = UserProfile {
            streak_days: 4,
            last_chat_date: Some(Utc::now() - Duration::days(3)),
            ..Default::default()
        };

        record_interaction(&mut profile, None, None, Utc::now());
        assert_eq!(profile.streak_days, 1);
    }

    #[test]
    fn test_same_day_leaves_streak_untouched() {
        let now = Utc::now();
        let mut profile = UserProfile {
            streak_days: 4,
            last_chat_date: Some(now),
            ..Default::default()
        };

        record_interaction(&mut profile, None, None, now);
        assert_eq!(profile.streak_days, 4);
    }

    #[test]
    fn test_topics_and_personas_deduplicate() {
        let mut profile = UserProfile::default();
        let now = Utc::now();

        record_interaction(&mut profile, Some("Math"), Some("professor"), now);
        record_interaction(&mut profile, Some("Math"), Some("professor"), now);
        record_interaction(&mut profile, Some("Art"), Some("buddy"), now);

        assert_eq!(profile.total_messages, 3);
        assert_eq!(profile.topics, vec!["Math", "Art"]);
        assert_eq!(profile.personalities_used, vec!["professor", "buddy"]);
    }

    #[test]
    fn test_level_recomputed_from_points() {
        let mut profile = UserProfile {
            total_points: 250,
            ..Default::default()
        };

        record_interaction(&mut profile, None, None, Utc::now());
        assert_eq!(profile.level, 3);
    }

    #[test]
    fn test_quiz_score_never_exceeds_attempts() {
        let mut profile = UserProfile::default();

        record_quiz_result(&mut profile, true);
        record_quiz_result(&mut profile, false);
        record_quiz_result(&mut profile, true);

        assert_eq!(profile.quiz_attempts, 3);
        assert_eq!(profile.quiz_score, 2);
        assert!(profile.quiz_score <= profile.quiz_attempts);
    }
}
