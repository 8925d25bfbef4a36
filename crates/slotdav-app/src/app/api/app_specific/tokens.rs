use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::error::service_status;
use crate::gateway_handler::get_gateway_from_depot;
use crate::middleware::admin::AdminAuthMiddleware;
use slotdav_service::error::ServiceError;
use slotdav_service::tokens;
use slotdav_store::model::NewToken;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Activation change request payload
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

fn render_error(res: &mut Response, status: StatusCode, message: impl Into<String>) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.into(),
    }));
}

fn render_service_error(res: &mut Response, err: &ServiceError) {
    let status = service_status(err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(error = %err, "Token administration failed");
        render_error(res, status, "Internal Server Error");
    } else {
        render_error(res, status, err.to_string());
    }
}

/// Parses the `{id}` path parameter, answering 404 for anything but a UUID.
fn token_id(req: &Request, res: &mut Response) -> Option<Uuid> {
    let parsed = req
        .param::<String>("id")
        .and_then(|raw| Uuid::parse_str(&raw).ok());
    if parsed.is_none() {
        render_error(res, StatusCode::NOT_FOUND, "Unknown token");
    }
    parsed
}

/// ## Summary
/// POST /api/tokens - Issue a calendar token.
///
/// The response carries the token's secret; it is not retrievable afterwards.
///
/// ## Errors
/// Returns HTTP 400 for an unreadable body, an empty name or an empty permission
/// list, and HTTP 500 if the store fails.
#[handler]
#[tracing::instrument(skip_all)]
async fn create_token(req: &mut Request, depot: &Depot, res: &mut Response) {
    let gateway = match get_gateway_from_depot(depot) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!(error = %e, "Failed to get gateway from depot");
            render_error(res, e.status_code(), "Internal Server Error");
            return;
        }
    };

    let request: NewToken = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse create token request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    match tokens::create_token(gateway.store.as_ref(), request).await {
        Ok(created) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(created));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /api/tokens - List calendar tokens without their secrets.
#[handler]
#[tracing::instrument(skip_all)]
async fn list_tokens(depot: &Depot, res: &mut Response) {
    let gateway = match get_gateway_from_depot(depot) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!(error = %e, "Failed to get gateway from depot");
            render_error(res, e.status_code(), "Internal Server Error");
            return;
        }
    };

    match tokens::list_tokens(gateway.store.as_ref()).await {
        Ok(list) => res.render(Json(list)),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// PATCH /api/tokens/{id} - Activate or deactivate a token.
///
/// ## Errors
/// Returns HTTP 400 for an unreadable body and HTTP 404 for an unknown id.
#[handler]
#[tracing::instrument(skip_all)]
async fn update_token(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = token_id(req, res) else {
        return;
    };
    let gateway = match get_gateway_from_depot(depot) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!(error = %e, "Failed to get gateway from depot");
            render_error(res, e.status_code(), "Internal Server Error");
            return;
        }
    };

    let request: SetActiveRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse token update request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    match tokens::set_token_active(gateway.store.as_ref(), id, request.active).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// DELETE /api/tokens/{id} - Revoke a token.
///
/// ## Errors
/// Returns HTTP 404 for an unknown id.
#[handler]
#[tracing::instrument(skip_all)]
async fn delete_token(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = token_id(req, res) else {
        return;
    };
    let gateway = match get_gateway_from_depot(depot) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!(error = %e, "Failed to get gateway from depot");
            render_error(res, e.status_code(), "Internal Server Error");
            return;
        }
    };

    match tokens::delete_token(gateway.store.as_ref(), id).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("tokens")
        .hoop(AdminAuthMiddleware)
        .get(list_tokens)
        .post(create_token)
        .push(
            Router::with_path("{id}")
                .patch(update_token)
                .delete(delete_token),
        )
}
