use chrono::{DateTime, Utc};
use slotdav_core::types::{Permission, Permissions};
use slotdav_store::SchedulingStore;

use crate::error::{ServiceError, ServiceResult};

/// The token a request was authenticated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedToken {
    pub token_id: uuid::Uuid,
    pub name: String,
    pub permissions: Permissions,
}

impl AuthenticatedToken {
    #[must_use]
    pub const fn can(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }
}

/// ## Summary
/// Validates a token secret.
///
/// A missing credential fails without consulting the store. Unknown, inactive and
/// expired tokens fail identically; the reason is only logged. On success the
/// token's last-used instant is stamped on a best-effort basis.
///
/// ## Errors
/// Returns `AuthenticationFailed` for any rejected credential and `UpstreamError`
/// if the store lookup fails.
#[tracing::instrument(skip_all)]
pub async fn authenticate(
    store: &dyn SchedulingStore,
    credential: Option<&str>,
    now: DateTime<Utc>,
) -> ServiceResult<AuthenticatedToken> {
    let Some(secret) = credential.filter(|c| !c.trim().is_empty()) else {
        tracing::debug!("No credential supplied");
        return Err(ServiceError::AuthenticationFailed);
    };

    let Some(token) = store.validate_token(secret).await? else {
        tracing::debug!("Unknown token");
        return Err(ServiceError::AuthenticationFailed);
    };

    if !token.active {
        tracing::debug!(token_id = %token.id, "Token inactive");
        return Err(ServiceError::AuthenticationFailed);
    }
    if !token.is_usable_at(now) {
        tracing::debug!(token_id = %token.id, "Token expired");
        return Err(ServiceError::AuthenticationFailed);
    }

    if let Err(e) = store.touch_token_last_used(token.id, now).await {
        tracing::warn!(token_id = %token.id, error = %e, "Failed to record token use");
    }

    tracing::trace!(token_id = %token.id, "Token authenticated");
    Ok(AuthenticatedToken {
        token_id: token.id,
        name: token.name,
        permissions: token.permissions,
    })
}
