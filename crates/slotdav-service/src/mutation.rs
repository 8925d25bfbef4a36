//! Write policy for event resources.
//!
//! Appointments are read-only. Busy slots can be created, replaced and deleted by
//! tokens holding the `busy_slots` permission.

use slotdav_core::types::{CalendarEvent, EventCategory, Permission};
use slotdav_store::model::{BusySlotFields, UpsertOutcome};

use crate::auth::AuthenticatedToken;
use crate::calendar::busy_slot_to_event;
use crate::error::{ServiceError, ServiceResult};
use crate::gateway::Gateway;
use crate::naming::{ResourceName, ResourceTarget};

/// Result of a successful PUT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOutcome {
    pub created: bool,
    pub event: CalendarEvent,
}

fn require_write(token: &AuthenticatedToken) -> ServiceResult<()> {
    if token.can(Permission::BusySlots) {
        Ok(())
    } else {
        tracing::warn!(token_id = %token.token_id, "Write attempted without busy_slots permission");
        Err(ServiceError::AuthorizationError(
            "token lacks the busy_slots permission".to_string(),
        ))
    }
}

fn busy_slot_id(token: &AuthenticatedToken, name: ResourceName) -> ServiceResult<(String, bool)> {
    match name.target {
        ResourceTarget::Appointment(id) => {
            tracing::warn!(token_id = %token.token_id, appointment_id = %id, "Write to read-only appointment");
            Err(ServiceError::AuthorizationError(
                "appointments are read-only".to_string(),
            ))
        }
        ResourceTarget::BusySlot(id) => Ok((id, name.prefixed)),
    }
}

/// Strips a leading `"<busy label>: "` so titles survive a GET/PUT round trip.
fn busy_title(summary: Option<&str>, busy_label: &str) -> String {
    let summary = summary.unwrap_or_default().trim();
    let title = summary
        .strip_prefix(busy_label)
        .and_then(|rest| rest.strip_prefix(':'))
        .map_or(summary, str::trim);
    if title.is_empty() {
        busy_label.to_string()
    } else {
        title.to_string()
    }
}

/// ## Summary
/// Creates or replaces the busy slot behind an event resource.
///
/// ## Errors
/// - `AuthorizationError` if the token lacks `busy_slots`, the name addresses an
///   appointment, or an unprefixed body is categorized as an appointment
/// - `RfcError` if the body is not a usable `VEVENT`
/// - `ValidationError` if the event does not end after it starts
/// - `UpstreamError` if the store fails
#[tracing::instrument(skip(gateway, token, body), fields(token_id = %token.token_id))]
pub async fn put_event(
    gateway: &Gateway,
    token: &AuthenticatedToken,
    resource_name: &str,
    body: &str,
) -> ServiceResult<PutOutcome> {
    require_write(token)?;
    let (id, prefixed) = busy_slot_id(token, ResourceName::parse(resource_name)?)?;

    let decoded = gateway.codec.decode_event(body)?;
    match decoded.category() {
        Some(EventCategory::Appointment) if !prefixed => {
            tracing::warn!(token_id = %token.token_id, "Appointment-categorized event rejected");
            return Err(ServiceError::AuthorizationError(
                "appointments are read-only".to_string(),
            ));
        }
        Some(_) => {}
        None => tracing::debug!(
            categories = ?decoded.categories,
            "No recognized category, treating as busy slot"
        ),
    }

    if decoded.end <= decoded.start {
        return Err(ServiceError::ValidationError(
            "DTEND must be after DTSTART".to_string(),
        ));
    }

    let meta = gateway.metadata().await;
    let fields = BusySlotFields {
        start: decoded.start,
        end: decoded.end,
        title: busy_title(decoded.summary.as_deref(), &meta.busy_label),
        description: decoded.description.filter(|d| !d.is_empty()),
    };

    let upserted = gateway.store.upsert_busy_slot(&id, fields).await?;
    let created = upserted.outcome == UpsertOutcome::Created;
    tracing::debug!(busy_slot_id = %id, created, "Busy slot stored");

    Ok(PutOutcome {
        created,
        event: busy_slot_to_event(&upserted.slot, &meta),
    })
}

/// ## Summary
/// Deletes the busy slot behind an event resource.
///
/// ## Errors
/// - `AuthorizationError` if the token lacks `busy_slots` or the name addresses an
///   appointment
/// - `NotFound` if no such busy slot exists
/// - `UpstreamError` if the store fails
#[tracing::instrument(skip(gateway, token), fields(token_id = %token.token_id))]
pub async fn delete_event(
    gateway: &Gateway,
    token: &AuthenticatedToken,
    resource_name: &str,
) -> ServiceResult<()> {
    require_write(token)?;
    let (id, _) = busy_slot_id(token, ResourceName::parse(resource_name)?)?;

    if gateway.store.delete_busy_slot(&id).await? {
        tracing::debug!(busy_slot_id = %id, "Busy slot deleted");
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("event {resource_name}")))
    }
}
