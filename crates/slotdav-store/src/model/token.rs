use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slotdav_core::types::Permissions;

/// A calendar access token, without its secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarToken {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Permissions,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl CalendarToken {
    /// Whether the token may authenticate at `now`.
    #[must_use]
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.active && self.expires_at.is_none_or(|expires| now < expires)
    }
}

/// Fields for creating a token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewToken {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub permissions: Permissions,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A freshly created token together with its plain secret.
///
/// The secret is only available here; the store keeps a digest.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedToken {
    #[serde(flatten)]
    pub token: CalendarToken,
    pub secret: String,
}
