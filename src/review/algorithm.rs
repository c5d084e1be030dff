//! Leitner-style interval scheduling
//!
//! Four proficiency levels map to a fixed interval ladder: 10 minutes,
//! 1 hour, 1 day, 3 days. A correct grade promotes a record one level
//! (capped at 3); any lapse resets it to level 0 and the tightest cadence.

use chrono::{DateTime, Duration, Utc};

use crate::history::InteractionRecord;

/// Highest proficiency level a record can reach
pub const MAX_LEVEL: i32 = 3;

/// Review interval for a proficiency level
///
/// Monotonically non-decreasing in the level; out-of-range input clamps to
/// the nearest rung.
pub fn interval_for_level(level: i32) -> Duration {
    match level {
        i32::MIN..=0 => Duration::minutes(10),
        1 => Duration::minutes(60),
        2 => Duration::minutes(1440),
        _ => Duration::minutes(4320),
    }
}

/// Apply a graded answer to a record
///
/// Correct promotes by exactly one level up to [`MAX_LEVEL`]; incorrect
/// resets to 0. Either way the record counts as just reviewed.
pub fn apply_grade(record: &mut InteractionRecord, correct: bool, now: DateTime<Utc>) {
    if correct {
        record.level = (record.level + 1).clamp(0, MAX_LEVEL);
    } else {
        record.level = 0;
    }
    record.last_reviewed = now;
}

/// Find the next record due for review
///
/// Scans in insertion order and returns the first record whose interval has
/// elapsed. Deliberately not most-overdue-first: when several records are
/// due, the earliest-logged one surfaces first.
pub fn next_due(log: &[InteractionRecord], now: DateTime<Utc>) -> Option<&InteractionRecord> {
    log.iter()
        .find(|r| now - r.last_reviewed >= interval_for_level(r.level))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(query: &str, level: i32, minutes_ago: i64, now: DateTime<Utc>) -> InteractionRecord {
        let mut record = InteractionRecord::new(query.to_string(), "answer".to_string());
        record.level = level;
        record.last_reviewed = now - Duration::minutes(minutes_ago);
        record
    }

    #[test]
    fn test_interval_ladder_values() {
        assert_eq!(interval_for_level(0), Duration::minutes(10));
        assert_eq!(interval_for_level(1), Duration::minutes(60));
        assert_eq!(interval_for_level(2), Duration::minutes(1440));
        assert_eq!(interval_for_level(3), Duration::minutes(4320));
    }

    #[test]
    fn test_interval_non_decreasing() {
        for level in 0..3 {
            assert!(interval_for_level(level) <= interval_for_level(level + 1));
        }
    }

    #[test]
    fn test_interval_clamps_out_of_range() {
        assert_eq!(interval_for_level(-1), Duration::minutes(10));
        assert_eq!(interval_for_level(99), Duration::minutes(4320));
    }

    #[test]
    fn test_correct_grade_promotes_one_level() {
        let now = Utc::now();
        for level in 0..=3 {
            let mut record = record_at("q", level, 0, now);
            apply_grade(&mut record, true, now);
            assert_eq!(record.level, (level + 1).min(MAX_LEVEL));
            assert_eq!(record.last_reviewed, now);
        }
    }

    #[test]
    fn test_incorrect_grade_resets_to_zero() {
        let now = Utc::now();
        for level in 0..=3 {
            let mut record = record_at("q", level, 0, now);
            apply_grade(&mut record, false, now);
            assert_eq!(record.level, 0);
        }
    }

    #[test]
    fn test_level_never_goes_negative() {
        let now = Utc::now();
        let mut record = record_at("q", -5, 0, now);
        apply_grade(&mut record, true, now);
        assert_eq!(record.level, 0);
    }

    #[test]
    fn test_next_due_returns_first_in_insertion_order() {
        let now = Utc::now();
        // Both are due; the second is far more overdue, but the first wins.
        let log = vec![
            record_at("first", 0, 15, now),
            record_at("second", 0, 500, now),
        ];

        let due = next_due(&log, now).unwrap();
        assert_eq!(due.query, "first");
    }

    #[test]
    fn test_next_due_skips_unelapsed_intervals() {
        let now = Utc::now();
        let log = vec![
            record_at("fresh", 0, 5, now),    // 10min interval not elapsed
            record_at("learned", 1, 90, now), // 60min interval elapsed
        ];

        let due = next_due(&log, now).unwrap();
        assert_eq!(due.query, "learned");
    }

    #[test]
    fn test_next_due_none_when_nothing_qualifies() {
        let now = Utc::now();
        let log = vec![record_at("fresh", 2, 30, now)];

        assert!(next_due(&log, now).is_none());
        assert!(next_due(&[], now).is_none());
    }

    #[test]
    fn test_due_then_graded_then_not_due() {
        let now = Utc::now();
        let mut log = vec![record_at("X", 0, 20, now)];

        assert_eq!(next_due(&log, now).unwrap().query, "X");

        apply_grade(&mut log[0], true, now);
        assert_eq!(log[0].level, 1);
        // 60-minute interval just started; nothing is due anymore.
        assert!(next_due(&log, now).is_none());
    }
}
