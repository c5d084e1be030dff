//! Data model for the interaction log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One question/response exchange, with the review metadata the scheduler
/// needs. `topic` and `personality` are optional so records written before
/// either field existed still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    /// Unique identifier, assigned for records that predate the field
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// The user's original question or topic
    pub query: String,
    /// The stored answer/explanation text
    pub response: String,
    /// Proficiency level, 0..=3; starts at 0
    #[serde(default)]
    pub level: i32,
    /// When the record was created or last shown for review
    pub last_reviewed: DateTime<Utc>,
    /// Classification label, if the caller supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Persona id that produced the response, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
}

impl InteractionRecord {
    pub fn new(query: String, response: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            query,
            response,
            level: 0,
            last_reviewed: Utc::now(),
            topic: None,
            personality: None,
        }
    }

    /// Builder method to add a topic label
    pub fn with_topic(mut self, topic: String) -> Self {
        self.topic = Some(topic);
        self
    }

    /// Builder method to add a persona id
    pub fn with_personality(mut self, personality: String) -> Self {
        self.personality = Some(personality);
        self
    }
}
