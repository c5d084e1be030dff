//! Recall: the core of a personal learning companion
//!
//! Spaced repetition scheduling, mastery tracking, day streaks, and
//! achievements over a conversational learning log. The crate owns the two
//! persisted collections (interaction log and user profile) and exposes a
//! small synchronous engine facade; chat UI, prompt construction, and model
//! API calls are presentation-layer concerns that consume this crate.

pub mod achievements;
pub mod engine;
pub mod history;
pub mod personas;
pub mod profile;
pub mod review;
pub mod storage;

pub use engine::LearningEngine;
pub use history::InteractionRecord;
pub use profile::UserProfile;
pub use storage::StorageError;
