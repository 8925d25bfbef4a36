use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};

use crate::error::StoreResult;
use crate::model::{
    Appointment, BusySlot, BusySlotFields, CalendarToken, CreatedToken, DateRange, NewToken,
    Upserted,
};

/// Boxed future returned by every store operation.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// ## Summary
/// Persistence boundary of the gateway.
///
/// Every operation touches a single record atomically. The gateway never reaches
/// persistence through any other path.
pub trait SchedulingStore: Send + Sync {
    fn list_appointments<'a>(&'a self, range: Option<DateRange>)
    -> StoreFuture<'a, Vec<Appointment>>;

    fn get_appointment<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Option<Appointment>>;

    fn list_busy_slots<'a>(&'a self, range: Option<DateRange>) -> StoreFuture<'a, Vec<BusySlot>>;

    fn get_busy_slot<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Option<BusySlot>>;

    /// Creates or replaces a busy slot. `updated_at` only advances when a field
    /// actually changes.
    fn upsert_busy_slot<'a>(&'a self, id: &'a str, fields: BusySlotFields)
    -> StoreFuture<'a, Upserted>;

    /// Returns `false` if no slot with this id existed.
    fn delete_busy_slot<'a>(&'a self, id: &'a str) -> StoreFuture<'a, bool>;

    /// Looks up the token owning `secret`, whatever its state.
    fn validate_token<'a>(&'a self, secret: &'a str) -> StoreFuture<'a, Option<CalendarToken>>;

    fn touch_token_last_used<'a>(
        &'a self,
        id: uuid::Uuid,
        at: DateTime<Utc>,
    ) -> StoreFuture<'a, ()>;

    fn create_token<'a>(&'a self, token: NewToken) -> StoreFuture<'a, CreatedToken>;

    fn list_tokens<'a>(&'a self) -> StoreFuture<'a, Vec<CalendarToken>>;

    /// Returns `false` if the token does not exist.
    fn set_token_active<'a>(&'a self, id: uuid::Uuid, active: bool) -> StoreFuture<'a, bool>;

    /// Returns `false` if the token does not exist.
    fn delete_token<'a>(&'a self, id: uuid::Uuid) -> StoreFuture<'a, bool>;
}
