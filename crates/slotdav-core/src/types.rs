//! Domain types shared by the store, service and HTTP layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_APPOINTMENT_LABEL, DEFAULT_BUSY_LABEL, DEFAULT_CALENDAR_DESCRIPTION,
    DEFAULT_CALENDAR_NAME, DEFAULT_CALENDAR_SLUG, DEFAULT_CURRENCY, DEFAULT_MAX_EVENTS,
    DEFAULT_REFRESH_INTERVAL_MINUTES, DEFAULT_TIMEZONE,
};

/// A record collection a calendar token may be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Appointments,
    BusySlots,
}

impl Permission {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Appointments => "appointments",
            Self::BusySlots => "busy_slots",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission set held by a calendar token.
///
/// Serialized as a list of permission names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Permission>", into = "Vec<Permission>")]
pub struct Permissions {
    appointments: bool,
    busy_slots: bool,
}

impl Permissions {
    /// Both record collections.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            appointments: true,
            busy_slots: true,
        }
    }

    #[must_use]
    pub const fn contains(self, permission: Permission) -> bool {
        match permission {
            Permission::Appointments => self.appointments,
            Permission::BusySlots => self.busy_slots,
        }
    }

    pub const fn insert(&mut self, permission: Permission) {
        match permission {
            Permission::Appointments => self.appointments = true,
            Permission::BusySlots => self.busy_slots = true,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.appointments && !self.busy_slots
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<Permission> {
        [Permission::Appointments, Permission::BusySlots]
            .into_iter()
            .filter(|p| self.contains(*p))
            .collect()
    }
}

impl FromIterator<Permission> for Permissions {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = Self::default();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}

impl From<Vec<Permission>> for Permissions {
    fn from(value: Vec<Permission>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Permissions> for Vec<Permission> {
    fn from(value: Permissions) -> Self {
        value.to_vec()
    }
}

/// Which record collection an event was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Appointment,
    Busy,
}

impl EventCategory {
    /// Value of the `CATEGORIES` property.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Appointment => "APPOINTMENT",
            Self::Busy => "BUSY",
        }
    }

    /// Parses a single category token, case-insensitively.
    #[must_use]
    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "APPOINTMENT" => Some(Self::Appointment),
            "BUSY" => Some(Self::Busy),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `STATUS` of a derived event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tentative => "TENTATIVE",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// A calendar event derived from an appointment or a busy slot.
///
/// Built per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Type-prefixed identifier, `apt-<id>` or `busy-<id>`.
    pub uid: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub status: EventStatus,
    pub category: EventCategory,
    pub last_modified: DateTime<Utc>,
    /// Quoted entity tag.
    pub etag: String,
}

impl CalendarEvent {
    /// Resource name of the event inside the calendar collection.
    #[must_use]
    pub fn resource_name(&self) -> String {
        format!("{}{}", self.uid, crate::constants::ICS_EXTENSION)
    }
}

/// Display and behaviour settings for the exposed calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMetadata {
    pub name: String,
    pub description: String,
    /// IANA timezone name announced to clients.
    pub timezone: String,
    pub contact: Option<String>,
    pub location: Option<String>,
    /// Path segment of the calendar collection.
    pub slug: String,
    pub max_events: usize,
    pub refresh_interval_minutes: u32,
    pub appointment_label: String,
    pub busy_label: String,
    pub currency: String,
}

impl Default for CalendarMetadata {
    fn default() -> Self {
        Self {
            name: DEFAULT_CALENDAR_NAME.to_string(),
            description: DEFAULT_CALENDAR_DESCRIPTION.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            contact: None,
            location: None,
            slug: DEFAULT_CALENDAR_SLUG.to_string(),
            max_events: DEFAULT_MAX_EVENTS,
            refresh_interval_minutes: DEFAULT_REFRESH_INTERVAL_MINUTES,
            appointment_label: DEFAULT_APPOINTMENT_LABEL.to_string(),
            busy_label: DEFAULT_BUSY_LABEL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
