//! Storage for the singleton user profile

use std::fs;
use std::path::PathBuf;

use super::models::UserProfile;
use crate::storage::{write_json_atomic, Result};

/// Storage for the one-per-user profile document
pub struct ProfileStorage {
    profile_file: PathBuf,
}

impl ProfileStorage {
    /// Create a new profile storage, creating the data directory if needed
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            profile_file: data_dir.join("profile.json"),
        })
    }

    /// Load the profile, lazily defaulting on first use
    ///
    /// Missing and corrupt files both yield zeroed defaults (warned in the
    /// corrupt case); only I/O failures propagate.
    pub fn load(&self) -> Result<UserProfile> {
        if !self.profile_file.exists() {
            return Ok(UserProfile::default());
        }

        let content = fs::read_to_string(&self.profile_file)?;
        match serde_json::from_str(&content) {
            Ok(profile) => Ok(profile),
            Err(e) => {
                log::warn!(
                    "Corrupt profile {:?}, using defaults: {}",
                    self.profile_file,
                    e
                );
                Ok(UserProfile::default())
            }
        }
    }

    /// Persist the whole profile as one atomic write
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        write_json_atomic(&self.profile_file, profile)
    }
}
