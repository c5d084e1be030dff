//! The engine facade: the one surface a presentation layer talks to
//!
//! Ties the interaction log, profile, scheduler, and achievement evaluator
//! together. Every operation is a synchronous load-mutate-save cycle over
//! whole collections; single local user, single process, no locking.

use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};

use crate::achievements;
use crate::history::{HistoryStorage, InteractionRecord};
use crate::profile::{stats, ProfileStorage, UserProfile};
use crate::review;
use crate::storage::{default_data_dir, Result};

pub struct LearningEngine {
    history: HistoryStorage,
    profiles: ProfileStorage,
}

impl LearningEngine {
    /// Open an engine over an explicit data directory
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            history: HistoryStorage::new(data_dir.clone())?,
            profiles: ProfileStorage::new(data_dir)?,
        })
    }

    /// Open an engine over the default per-user data directory
    pub fn open_default() -> Result<Self> {
        Self::new(default_data_dir()?)
    }

    /// Record one user turn
    ///
    /// Appends to the interaction log, folds the turn into the profile
    /// (counters, topic/persona diversity, streak), evaluates achievements,
    /// and persists the profile as one write. Returns the display names of
    /// anything newly unlocked.
    pub fn submit_interaction(
        &self,
        query: &str,
        response: &str,
        topic: Option<&str>,
        personality: Option<&str>,
    ) -> Result<Vec<String>> {
        let mut record = InteractionRecord::new(query.to_string(), response.to_string());
        record.topic = topic.map(str::to_string);
        record.personality = personality.map(str::to_string);
        self.history.append(record)?;

        let mut profile = self.profiles.load()?;
        stats::record_interaction(&mut profile, topic, personality, Utc::now());
        let newly_unlocked = achievements::evaluate(&mut profile, Local::now());
        self.profiles.save(&profile)?;

        Ok(newly_unlocked)
    }

    /// The next record due for review at `now`, if any
    pub fn next_due_item(&self, now: DateTime<Utc>) -> Result<Option<InteractionRecord>> {
        let records = self.history.load_all()?;
        Ok(review::next_due(&records, now).cloned())
    }

    /// Grade the answer to a review question
    ///
    /// Matches the first record with the given query text. An unknown query
    /// is a silent no-op: nothing is mutated and nothing unlocks. On a
    /// match, the record's level moves and the quiz attempt is counted on
    /// the profile; returns the display names of anything newly unlocked.
    pub fn grade_answer(&self, query: &str, correct: bool) -> Result<Vec<String>> {
        let mut records = self.history.load_all()?;
        let Some(record) = records.iter_mut().find(|r| r.query == query) else {
            log::debug!("Grade for unknown query {:?} ignored", query);
            return Ok(Vec::new());
        };

        review::apply_grade(record, correct, Utc::now());
        self.history.save_all(&records)?;

        let mut profile = self.profiles.load()?;
        stats::record_quiz_result(&mut profile, correct);
        let newly_unlocked = achievements::evaluate(&mut profile, Local::now());
        self.profiles.save(&profile)?;

        Ok(newly_unlocked)
    }

    /// Read-only view of the profile for display
    pub fn profile_snapshot(&self) -> Result<UserProfile> {
        self.profiles.load()
    }

    /// The full interaction log in insertion order
    pub fn history(&self) -> Result<Vec<InteractionRecord>> {
        self.history.load_all()
    }

    /// Empty the interaction log. The profile is a separate collection and
    /// keeps its counters, points, and unlocks.
    pub fn clear_history(&self) -> Result<()> {
        self.history.clear()
    }
}
