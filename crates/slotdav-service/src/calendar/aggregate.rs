use chrono::{DateTime, Utc};
use slotdav_core::types::{CalendarEvent, CalendarMetadata, Permission, Permissions};
use slotdav_rfc::rfc::dav::validators::content_etag;
use slotdav_store::SchedulingStore;
use slotdav_store::model::DateRange;

use super::mapping::{appointment_to_event, busy_slot_to_event};
use crate::error::{ServiceError, ServiceResult};
use crate::naming::{ResourceName, ResourceTarget};

/// ## Summary
/// Lists the events visible to a permission set.
///
/// Appointments are only read with the `appointments` permission and busy slots
/// only with `busy_slots`. The result is sorted by start (ties by uid) and cut to
/// `meta.max_events`.
///
/// ## Errors
/// Returns `UpstreamError` if the store fails.
#[tracing::instrument(skip(store, meta))]
pub async fn list_events(
    store: &dyn SchedulingStore,
    meta: &CalendarMetadata,
    permissions: Permissions,
    range: Option<DateRange>,
) -> ServiceResult<Vec<CalendarEvent>> {
    let mut events = Vec::new();

    if permissions.contains(Permission::Appointments) {
        events.extend(
            store
                .list_appointments(range)
                .await?
                .iter()
                .map(|a| appointment_to_event(a, meta)),
        );
    }
    if permissions.contains(Permission::BusySlots) {
        events.extend(
            store
                .list_busy_slots(range)
                .await?
                .iter()
                .map(|s| busy_slot_to_event(s, meta)),
        );
    }

    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.uid.cmp(&b.uid)));
    events.truncate(meta.max_events);

    tracing::debug!(count = events.len(), "Events aggregated");
    Ok(events)
}

/// ## Summary
/// Looks up a single event by resource name.
///
/// The name's prefix selects the record collection. A collection outside the
/// permission set is reported as missing and never queried.
///
/// ## Errors
/// Returns `NotFound` if the record does not exist or is out of scope, and
/// `UpstreamError` if the store fails.
#[tracing::instrument(skip(store, meta))]
pub async fn get_event(
    store: &dyn SchedulingStore,
    meta: &CalendarMetadata,
    permissions: Permissions,
    resource_name: &str,
) -> ServiceResult<CalendarEvent> {
    let name = ResourceName::parse(resource_name)?;
    let not_found = || ServiceError::NotFound(format!("event {resource_name}"));

    match name.target {
        ResourceTarget::Appointment(id) => {
            if !permissions.contains(Permission::Appointments) {
                return Err(not_found());
            }
            store
                .get_appointment(&id)
                .await?
                .map(|a| appointment_to_event(&a, meta))
                .ok_or_else(not_found)
        }
        ResourceTarget::BusySlot(id) => {
            if !permissions.contains(Permission::BusySlots) {
                return Err(not_found());
            }
            store
                .get_busy_slot(&id)
                .await?
                .map(|s| busy_slot_to_event(&s, meta))
                .ok_or_else(not_found)
        }
    }
}

/// Collection tag (`CS:getctag`) over the listed events. Changes whenever an event
/// is added, removed or modified.
#[must_use]
pub fn collection_tag(events: &[CalendarEvent]) -> String {
    let joined = events
        .iter()
        .map(|e| format!("{}={}", e.uid, e.etag))
        .collect::<Vec<_>>()
        .join("\n");
    content_etag(joined.as_bytes())
}

/// Latest modification instant among the events.
#[must_use]
pub fn last_modified(events: &[CalendarEvent]) -> Option<DateTime<Utc>> {
    events.iter().map(|e| e.last_modified).max()
}
