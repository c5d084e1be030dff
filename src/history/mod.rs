//! Interaction history: the append-only log of question/response records
//! that feeds the review cycle

pub mod models;
pub mod storage;

pub use models::InteractionRecord;
pub use storage::HistoryStorage;
