//! User profile: running statistics, day streaks, points, and level

pub mod models;
pub mod stats;
pub mod storage;

pub use models::UserProfile;
pub use storage::ProfileStorage;
