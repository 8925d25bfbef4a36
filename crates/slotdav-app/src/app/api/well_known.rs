//! `/.well-known/caldav` service discovery (RFC 6764).

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler};
use slotdav_core::constants::{CALDAV_ROUTE_PREFIX, WELL_KNOWN_CALDAV};

use crate::app::api::response::set_header;
use crate::gateway_handler::get_route_base_from_depot;

/// ## Summary
/// Redirects discovery requests to the `CalDAV` root. No authentication.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn redirect(req: &mut Request, res: &mut Response, depot: &Depot) {
    let location = format!("{}{CALDAV_ROUTE_PREFIX}/", get_route_base_from_depot(depot));
    tracing::debug!(%location, "Redirecting service discovery");
    set_header(res, "Location", &location);
    res.status_code(StatusCode::MOVED_PERMANENTLY);
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(WELL_KNOWN_CALDAV).goal(redirect)
}
