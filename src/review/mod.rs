//! Spaced repetition scheduling over the interaction log
//!
//! This module provides:
//! - The fixed interval ladder for the four proficiency levels
//! - Grade-driven level transitions (promote on correct, reset on lapse)
//! - Due-item selection in insertion order

pub mod algorithm;

pub use algorithm::{apply_grade, interval_for_level, next_due, MAX_LEVEL};
