//! Calendar token administration.

use slotdav_store::SchedulingStore;
use slotdav_store::model::{CalendarToken, CreatedToken, NewToken};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Creates a token and returns it with its secret.
///
/// ## Errors
/// Returns `ValidationError` for an empty name or permission set, and
/// `UpstreamError` if the store fails.
#[tracing::instrument(skip_all, fields(name = %request.name))]
pub async fn create_token(
    store: &dyn SchedulingStore,
    mut request: NewToken,
) -> ServiceResult<CreatedToken> {
    request.name = request.name.trim().to_string();
    if request.name.is_empty() {
        return Err(ServiceError::ValidationError(
            "token name must not be empty".to_string(),
        ));
    }
    if request.permissions.is_empty() {
        return Err(ServiceError::ValidationError(
            "token needs at least one permission".to_string(),
        ));
    }

    let created = store.create_token(request).await?;
    tracing::info!(token_id = %created.token.id, "Calendar token issued");
    Ok(created)
}

/// ## Errors
/// Returns `UpstreamError` if the store fails.
pub async fn list_tokens(store: &dyn SchedulingStore) -> ServiceResult<Vec<CalendarToken>> {
    Ok(store.list_tokens().await?)
}

/// ## Summary
/// Activates or deactivates a token.
///
/// ## Errors
/// Returns `NotFound` for an unknown id and `UpstreamError` if the store fails.
#[tracing::instrument(skip(store))]
pub async fn set_token_active(
    store: &dyn SchedulingStore,
    id: uuid::Uuid,
    active: bool,
) -> ServiceResult<()> {
    if store.set_token_active(id, active).await? {
        tracing::info!("Calendar token state changed");
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("token {id}")))
    }
}

/// ## Summary
/// Revokes a token permanently.
///
/// ## Errors
/// Returns `NotFound` for an unknown id and `UpstreamError` if the store fails.
#[tracing::instrument(skip(store))]
pub async fn delete_token(store: &dyn SchedulingStore, id: uuid::Uuid) -> ServiceResult<()> {
    if store.delete_token(id).await? {
        tracing::info!("Calendar token revoked");
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("token {id}")))
    }
}
