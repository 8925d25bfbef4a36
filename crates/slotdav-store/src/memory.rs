//! In-memory scheduling store.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::model::{
    Appointment, BusySlot, BusySlotFields, CalendarToken, CreatedToken, DateRange, NewToken,
    UpsertOutcome, Upserted,
};
use crate::provider::{SchedulingStore, StoreFuture};
use crate::secret::{generate_secret, hash_secret};

#[derive(Debug, Default)]
struct State {
    appointments: BTreeMap<String, Appointment>,
    busy_slots: BTreeMap<String, BusySlot>,
    tokens: HashMap<uuid::Uuid, CalendarToken>,
    /// Secret digest to token id.
    secrets: HashMap<String, uuid::Uuid>,
}

/// ## Summary
/// A [`SchedulingStore`] keeping every record in process memory.
///
/// Used as the reference store of the standalone binary and as the test double.
/// Each operation holds the lock for a single record change.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an appointment.
    pub async fn insert_appointment(&self, appointment: Appointment) {
        let mut state = self.state.write().await;
        state
            .appointments
            .insert(appointment.id.clone(), appointment);
    }

    /// Inserts or replaces a busy slot, keeping its `updated_at` as given.
    pub async fn insert_busy_slot(&self, slot: BusySlot) {
        let mut state = self.state.write().await;
        state.busy_slots.insert(slot.id.clone(), slot);
    }

    /// ## Summary
    /// Registers a token under a caller-chosen secret.
    ///
    /// Used for seeding and tests, where the secret must be known in advance.
    pub async fn insert_token_with_secret(&self, token: NewToken, secret: &str) -> CalendarToken {
        let record = CalendarToken {
            id: uuid::Uuid::now_v7(),
            name: token.name,
            description: token.description,
            permissions: token.permissions,
            expires_at: token.expires_at,
            active: true,
            last_used_at: None,
            created_at: Utc::now(),
        };

        let mut state = self.state.write().await;
        state.secrets.insert(hash_secret(secret), record.id);
        state.tokens.insert(record.id, record.clone());
        record
    }

    /// Returns the current record of a token, if any.
    pub async fn token(&self, id: uuid::Uuid) -> Option<CalendarToken> {
        self.state.read().await.tokens.get(&id).cloned()
    }
}

fn apply_fields(slot: &mut BusySlot, fields: BusySlotFields) -> bool {
    if slot.fields() == fields {
        return false;
    }
    slot.start = fields.start;
    slot.end = fields.end;
    slot.title = fields.title;
    slot.description = fields.description;
    true
}

impl SchedulingStore for InMemoryStore {
    fn list_appointments<'a>(
        &'a self,
        range: Option<DateRange>,
    ) -> StoreFuture<'a, Vec<Appointment>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state
                .appointments
                .values()
                .filter(|a| range.is_none_or(|r| r.overlaps(a.start, a.end())))
                .cloned()
                .collect())
        })
    }

    fn get_appointment<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Option<Appointment>> {
        Box::pin(async move { Ok(self.state.read().await.appointments.get(id).cloned()) })
    }

    fn list_busy_slots<'a>(&'a self, range: Option<DateRange>) -> StoreFuture<'a, Vec<BusySlot>> {
        Box::pin(async move {
            let state = self.state.read().await;
            Ok(state
                .busy_slots
                .values()
                .filter(|s| range.is_none_or(|r| r.overlaps(s.start, s.end)))
                .cloned()
                .collect())
        })
    }

    fn get_busy_slot<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Option<BusySlot>> {
        Box::pin(async move { Ok(self.state.read().await.busy_slots.get(id).cloned()) })
    }

    #[tracing::instrument(skip(self, fields))]
    fn upsert_busy_slot<'a>(
        &'a self,
        id: &'a str,
        fields: BusySlotFields,
    ) -> StoreFuture<'a, Upserted> {
        Box::pin(async move {
            let mut state = self.state.write().await;

            if let Some(slot) = state.busy_slots.get_mut(id) {
                if apply_fields(slot, fields) {
                    slot.updated_at = Utc::now();
                    tracing::debug!("Busy slot updated");
                } else {
                    tracing::debug!("Busy slot unchanged");
                }
                return Ok(Upserted {
                    outcome: UpsertOutcome::Updated,
                    slot: slot.clone(),
                });
            }

            let slot = BusySlot {
                id: id.to_string(),
                start: fields.start,
                end: fields.end,
                title: fields.title,
                description: fields.description,
                updated_at: Utc::now(),
            };
            state.busy_slots.insert(slot.id.clone(), slot.clone());
            tracing::debug!("Busy slot created");

            Ok(Upserted {
                outcome: UpsertOutcome::Created,
                slot,
            })
        })
    }

    fn delete_busy_slot<'a>(&'a self, id: &'a str) -> StoreFuture<'a, bool> {
        Box::pin(async move { Ok(self.state.write().await.busy_slots.remove(id).is_some()) })
    }

    fn validate_token<'a>(&'a self, secret: &'a str) -> StoreFuture<'a, Option<CalendarToken>> {
        Box::pin(async move {
            let digest = hash_secret(secret);
            let state = self.state.read().await;
            Ok(state
                .secrets
                .get(&digest)
                .and_then(|id| state.tokens.get(id))
                .cloned())
        })
    }

    fn touch_token_last_used<'a>(
        &'a self,
        id: uuid::Uuid,
        at: DateTime<Utc>,
    ) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            if let Some(token) = self.state.write().await.tokens.get_mut(&id) {
                token.last_used_at = Some(at);
            }
            Ok(())
        })
    }

    #[tracing::instrument(skip_all)]
    fn create_token<'a>(&'a self, token: NewToken) -> StoreFuture<'a, CreatedToken> {
        Box::pin(async move {
            let secret = generate_secret();
            let token = self.insert_token_with_secret(token, &secret).await;
            tracing::debug!(token_id = %token.id, "Calendar token created");
            Ok(CreatedToken { token, secret })
        })
    }

    fn list_tokens<'a>(&'a self) -> StoreFuture<'a, Vec<CalendarToken>> {
        Box::pin(async move {
            let state = self.state.read().await;
            let mut tokens: Vec<CalendarToken> = state.tokens.values().cloned().collect();
            tokens.sort_by_key(|t| t.created_at);
            Ok(tokens)
        })
    }

    fn set_token_active<'a>(&'a self, id: uuid::Uuid, active: bool) -> StoreFuture<'a, bool> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            let Some(token) = state.tokens.get_mut(&id) else {
                return Ok(false);
            };
            token.active = active;
            Ok(true)
        })
    }

    fn delete_token<'a>(&'a self, id: uuid::Uuid) -> StoreFuture<'a, bool> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.secrets.retain(|_, token_id| *token_id != id);
            Ok(state.tokens.remove(&id).is_some())
        })
    }
}
