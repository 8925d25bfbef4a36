//! DELETE method handler.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use slotdav_service::error::ServiceError;
use slotdav_service::mutation::delete_event;

use crate::app::api::caldav::context::DavContext;
use crate::app::api::caldav::path::DavTarget;
use crate::app::api::response::write_method_not_allowed;

/// ## Summary
/// Deletes the busy slot behind an event resource.
///
/// ## Errors
/// 403 for tokens without `busy_slots` and for appointment targets, 404 if the slot
/// does not exist, 405 on anything but an event resource.
#[handler]
#[tracing::instrument(skip_all, fields(method = "DELETE", path = %req.uri().path()))]
pub async fn delete(req: &mut Request, res: &mut Response, depot: &Depot) {
    let Some(ctx) = DavContext::load(req, depot, res).await else {
        return;
    };

    match &ctx.target {
        DavTarget::Event { name, .. } => {
            match delete_event(&ctx.gateway, &ctx.token, name).await {
                Ok(()) => {
                    tracing::info!(resource = %name, "Busy slot deleted");
                    res.status_code(StatusCode::NO_CONTENT);
                }
                Err(e) => ctx.fail(req, res, &e),
            }
        }
        DavTarget::Unknown => ctx.fail(req, res, &ServiceError::NotFound(ctx.path.clone())),
        _ => write_method_not_allowed(res, ctx.target.allow()),
    }
}
