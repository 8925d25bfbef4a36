//! PUT method handler.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use slotdav_service::error::ServiceError;
use slotdav_service::mutation::put_event;

use crate::app::api::caldav::context::DavContext;
use crate::app::api::caldav::path::DavTarget;
use crate::app::api::response::{set_header, write_method_not_allowed};

/// ## Summary
/// Creates or replaces the busy slot behind an event resource.
///
/// Answers 201 for a new slot and 204 for a replaced one, both with the new
/// `ETag`.
///
/// ## Errors
/// 403 for tokens without `busy_slots` and for appointment targets, 400 for bodies
/// that are not a valid event, 404 for unknown paths, 405 on collections.
#[handler]
#[tracing::instrument(skip_all, fields(method = "PUT", path = %req.uri().path()))]
pub async fn put(req: &mut Request, res: &mut Response, depot: &Depot) {
    let Some(ctx) = DavContext::load(req, depot, res).await else {
        return;
    };

    let name = match &ctx.target {
        DavTarget::Event { name, .. } => name.clone(),
        DavTarget::Unknown => {
            ctx.fail(req, res, &ServiceError::NotFound(ctx.path.clone()));
            return;
        }
        _ => {
            write_method_not_allowed(res, ctx.target.allow());
            return;
        }
    };

    let body = match req.payload().await {
        Ok(bytes) => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| ServiceError::ValidationError(format!("body is not UTF-8: {e}"))),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read request body");
            Err(ServiceError::ValidationError(
                "unreadable request body".to_string(),
            ))
        }
    };
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            ctx.fail(req, res, &e);
            return;
        }
    };

    match put_event(&ctx.gateway, &ctx.token, &name, &body).await {
        Ok(outcome) => {
            set_header(res, "ETag", &outcome.event.etag);
            res.status_code(if outcome.created {
                StatusCode::CREATED
            } else {
                StatusCode::NO_CONTENT
            });
            tracing::info!(uid = %outcome.event.uid, created = outcome.created, "Busy slot written");
        }
        Err(e) => ctx.fail(req, res, &e),
    }
}
