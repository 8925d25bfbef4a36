use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A manually blocked time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusySlot {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl BusySlot {
    /// Returns the client-writable fields of this slot.
    #[must_use]
    pub fn fields(&self) -> BusySlotFields {
        BusySlotFields {
            start: self.start,
            end: self.end,
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Writable fields of a busy slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusySlotFields {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Result of an upsert: what happened and the stored record afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upserted {
    pub outcome: UpsertOutcome,
    pub slot: BusySlot,
}
