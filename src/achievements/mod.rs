//! Achievements: a static catalog of unlockable milestones and the
//! evaluator that awards their points exactly once

pub mod catalog;
pub mod evaluator;
pub mod models;

pub use catalog::CATALOG;
pub use evaluator::evaluate;
pub use models::Achievement;
