//! Event resource names.
//!
//! Resource names are `<uid>.ics` where the uid carries a type prefix
//! (`apt-` or `busy-`). Names without a known prefix address busy slots, so
//! client-created resources with arbitrary names land in the writable collection.

use slotdav_core::constants::{APPOINTMENT_UID_PREFIX, BUSY_SLOT_UID_PREFIX, ICS_EXTENSION};

use crate::error::{ServiceError, ServiceResult};

/// Record a resource name points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceTarget {
    Appointment(String),
    BusySlot(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    pub target: ResourceTarget,
    /// Whether the name carried an explicit type prefix.
    pub prefixed: bool,
}

impl ResourceName {
    /// ## Summary
    /// Parses an event resource name such as `busy-b1.ics`.
    ///
    /// The `.ics` suffix is optional.
    ///
    /// ## Errors
    /// Returns `NotFound` if no record id remains after removing prefix and suffix.
    pub fn parse(name: &str) -> ServiceResult<Self> {
        let stem = name.strip_suffix(ICS_EXTENSION).unwrap_or(name);

        let (target, prefixed) = if let Some(id) = stem.strip_prefix(APPOINTMENT_UID_PREFIX) {
            (ResourceTarget::Appointment(id.to_string()), true)
        } else if let Some(id) = stem.strip_prefix(BUSY_SLOT_UID_PREFIX) {
            (ResourceTarget::BusySlot(id.to_string()), true)
        } else {
            (ResourceTarget::BusySlot(stem.to_string()), false)
        };

        let id = match &target {
            ResourceTarget::Appointment(id) | ResourceTarget::BusySlot(id) => id,
        };
        if id.is_empty() {
            return Err(ServiceError::NotFound(format!("resource {name}")));
        }

        Ok(Self { target, prefixed })
    }
}

/// Uid of the event derived from an appointment.
#[must_use]
pub fn appointment_uid(id: &str) -> String {
    format!("{APPOINTMENT_UID_PREFIX}{id}")
}

/// Uid of the event derived from a busy slot.
#[must_use]
pub fn busy_slot_uid(id: &str) -> String {
    format!("{BUSY_SLOT_UID_PREFIX}{id}")
}
