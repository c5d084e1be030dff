//! Storage for the interaction log (one JSON array, insertion ordered)

use std::fs;
use std::path::PathBuf;

use super::models::InteractionRecord;
use crate::storage::{write_json_atomic, Result};

/// Storage for the append-only interaction log
pub struct HistoryStorage {
    history_file: PathBuf,
}

impl HistoryStorage {
    /// Create a new history storage, creating the data directory if needed
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            history_file: data_dir.join("interactions.json"),
        })
    }

    /// Load the full log in insertion order
    ///
    /// A missing file is an empty log. A corrupt file is also treated as an
    /// empty log, with a warning, so the surrounding session stays usable.
    /// Only real I/O failures propagate.
    pub fn load_all(&self) -> Result<Vec<InteractionRecord>> {
        if !self.history_file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.history_file)?;
        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!(
                    "Corrupt interaction log {:?}, starting empty: {}",
                    self.history_file,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Append a record to the end of the log, persisting before returning
    pub fn append(&self, record: InteractionRecord) -> Result<InteractionRecord> {
        let mut records = self.load_all()?;
        records.push(record.clone());
        write_json_atomic(&self.history_file, &records)?;
        log::debug!("Appended interaction {}", record.id);
        Ok(record)
    }

    /// Replace the full log (used after grading mutates a record in place)
    pub fn save_all(&self, records: &[InteractionRecord]) -> Result<()> {
        write_json_atomic(&self.history_file, records)
    }

    /// Empty the log. The profile is a separate collection and is untouched.
    pub fn clear(&self) -> Result<()> {
        let empty: Vec<InteractionRecord> = Vec::new();
        write_json_atomic(&self.history_file, &empty)
    }
}
