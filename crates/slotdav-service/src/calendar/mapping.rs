use slotdav_core::types::{CalendarEvent, CalendarMetadata, EventCategory, EventStatus};
use slotdav_rfc::rfc::dav::validators::compute_etag;
use slotdav_store::model::{Appointment, AppointmentStatus, BusySlot};

use crate::naming::{appointment_uid, busy_slot_uid};

const fn appointment_status(status: AppointmentStatus) -> EventStatus {
    match status {
        AppointmentStatus::Pending => EventStatus::Tentative,
        AppointmentStatus::Cancelled | AppointmentStatus::NoShow => EventStatus::Cancelled,
        AppointmentStatus::Confirmed | AppointmentStatus::Completed => EventStatus::Confirmed,
    }
}

/// Formats minor currency units, e.g. `4550` as `45.50 EUR`.
fn format_price(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02} {currency}", abs / 100, abs % 100)
}

fn appointment_description(appointment: &Appointment, meta: &CalendarMetadata) -> Option<String> {
    let mut lines = Vec::new();
    if let Some(contact) = &appointment.customer_contact {
        lines.push(format!("Contact: {contact}"));
    }
    if let Some(price) = appointment.price_minor {
        lines.push(format!("Price: {}", format_price(price, &meta.currency)));
    }
    if let Some(notes) = appointment.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(format!("Notes: {notes}"));
    }
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// ## Summary
/// Derives the calendar event of an appointment.
///
/// `CONTACT` is the customer's contact, or the calendar's when the customer left none.
#[must_use]
pub fn appointment_to_event(appointment: &Appointment, meta: &CalendarMetadata) -> CalendarEvent {
    let uid = appointment_uid(&appointment.id);
    CalendarEvent {
        etag: compute_etag(&uid, appointment.updated_at),
        uid,
        start: appointment.start,
        end: appointment.end(),
        summary: format!("{}: {}", meta.appointment_label, appointment.customer_name),
        description: appointment_description(appointment, meta),
        location: meta.location.clone(),
        contact: appointment
            .customer_contact
            .clone()
            .or_else(|| meta.contact.clone()),
        status: appointment_status(appointment.status),
        category: EventCategory::Appointment,
        last_modified: appointment.updated_at,
    }
}

/// ## Summary
/// Derives the calendar event of a busy slot. `CONTACT` is the calendar's contact.
#[must_use]
pub fn busy_slot_to_event(slot: &BusySlot, meta: &CalendarMetadata) -> CalendarEvent {
    let uid = busy_slot_uid(&slot.id);
    CalendarEvent {
        etag: compute_etag(&uid, slot.updated_at),
        uid,
        start: slot.start,
        end: slot.end,
        summary: format!("{}: {}", meta.busy_label, slot.title),
        description: slot.description.clone(),
        location: meta.location.clone(),
        contact: meta.contact.clone(),
        status: EventStatus::Confirmed,
        category: EventCategory::Busy,
        last_modified: slot.updated_at,
    }
}
