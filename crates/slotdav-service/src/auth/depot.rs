//! Depot helpers for the authenticated token.

use crate::error::{ServiceError, ServiceResult};

use super::authenticate::AuthenticatedToken;

pub mod depot_keys {
    pub const AUTHENTICATED_TOKEN: &str = "__authenticated_token";
}

/// Stores the authenticated token for downstream handlers.
pub fn set_token_in_depot(depot: &mut salvo::Depot, token: AuthenticatedToken) {
    depot.insert(depot_keys::AUTHENTICATED_TOKEN, token);
}

/// Get the authenticated token from the depot.
///
/// ## Errors
///
/// Returns `AuthenticationFailed` if no token was stored by the auth middleware.
pub fn get_token_from_depot(depot: &salvo::Depot) -> ServiceResult<&AuthenticatedToken> {
    depot
        .get::<AuthenticatedToken>(depot_keys::AUTHENTICATED_TOKEN)
        .map_err(|_e| ServiceError::AuthenticationFailed)
}
