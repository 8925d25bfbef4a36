//! JSON seed documents for the in-memory store.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use slotdav_core::types::Permissions;

use crate::error::{StoreError, StoreResult};
use crate::memory::InMemoryStore;
use crate::model::{Appointment, BusySlot, NewToken};
use crate::provider::SchedulingStore;

/// Token entry of a seed document. Unlike API-created tokens, the secret is given.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedToken {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub permissions: Permissions,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub secret: String,
}

const fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub busy_slots: Vec<BusySlot>,
    #[serde(default)]
    pub tokens: Vec<SeedToken>,
}

impl SeedDocument {
    /// ## Summary
    /// Parses a seed document from JSON text.
    ///
    /// ## Errors
    /// Returns an error if the JSON is malformed, a token secret is empty, or a
    /// busy slot does not end after it starts.
    pub fn from_json(text: &str) -> StoreResult<Self> {
        let document: Self = serde_json::from_str(text)?;

        if let Some(token) = document.tokens.iter().find(|t| t.secret.trim().is_empty()) {
            return Err(StoreError::SeedError(format!(
                "token '{}' has an empty secret",
                token.name
            )));
        }
        if let Some(slot) = document.busy_slots.iter().find(|s| s.end <= s.start) {
            return Err(StoreError::SeedError(format!(
                "busy slot '{}' does not end after it starts",
                slot.id
            )));
        }

        Ok(document)
    }
}

/// ## Summary
/// Loads every record of a seed document into the store.
///
/// ## Errors
/// Returns an error if a store operation fails.
pub async fn apply_seed(store: &InMemoryStore, document: SeedDocument) -> StoreResult<()> {
    let counts = (
        document.appointments.len(),
        document.busy_slots.len(),
        document.tokens.len(),
    );

    for appointment in document.appointments {
        store.insert_appointment(appointment).await;
    }
    for slot in document.busy_slots {
        store.insert_busy_slot(slot).await;
    }
    for seed in document.tokens {
        let token = store
            .insert_token_with_secret(
                NewToken {
                    name: seed.name,
                    description: seed.description,
                    permissions: seed.permissions,
                    expires_at: seed.expires_at,
                },
                &seed.secret,
            )
            .await;
        if !seed.active {
            store.set_token_active(token.id, false).await?;
        }
    }

    tracing::info!(
        appointments = counts.0,
        busy_slots = counts.1,
        tokens = counts.2,
        "Store seeded"
    );
    Ok(())
}

/// ## Summary
/// Reads a seed file and loads it into the store.
///
/// ## Errors
/// Returns an error if the file cannot be read or is not a valid seed document.
#[tracing::instrument(skip(store), fields(path = %path.as_ref().display()))]
pub async fn load_seed_file(store: &InMemoryStore, path: impl AsRef<Path>) -> StoreResult<()> {
    let text = tokio::fs::read_to_string(path.as_ref()).await?;
    let document = SeedDocument::from_json(&text)?;
    apply_seed(store, document).await
}
