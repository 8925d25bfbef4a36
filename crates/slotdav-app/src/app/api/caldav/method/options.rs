//! OPTIONS method handler.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use slotdav_service::error::ServiceError;

use crate::app::api::caldav::context::DavContext;
use crate::app::api::caldav::path::DavTarget;
use crate::app::api::response::set_header;

/// DAV compliance classes: basic `WebDAV` and calendar access.
const DAV_HEADER: &str = "1, calendar-access";

/// ## Summary
/// Answers OPTIONS with the methods the addressed resource supports.
///
/// ## Side Effects
/// Sets the `Allow` and `DAV` headers on the response.
#[handler]
#[tracing::instrument(skip_all, fields(method = "OPTIONS", path = %req.uri().path()))]
pub async fn options(req: &mut Request, res: &mut Response, depot: &Depot) {
    let Some(ctx) = DavContext::load(req, depot, res).await else {
        return;
    };

    if ctx.target == DavTarget::Unknown {
        ctx.fail(req, res, &ServiceError::NotFound(ctx.path.clone()));
        return;
    }

    set_header(res, "Allow", ctx.target.allow());
    set_header(res, "DAV", DAV_HEADER);
    res.status_code(StatusCode::OK);

    tracing::debug!(allow = ctx.target.allow(), "OPTIONS response sent");
}
