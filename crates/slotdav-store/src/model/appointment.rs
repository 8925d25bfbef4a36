use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Booking state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

/// A booked service appointment. Read-only for the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_contact: Option<String>,
    pub start: DateTime<Utc>,
    pub duration_minutes: u32,
    /// Price in minor currency units.
    #[serde(default)]
    pub price_minor: Option<i64>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }
}
