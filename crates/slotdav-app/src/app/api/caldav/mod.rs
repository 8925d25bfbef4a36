//! `CalDAV` resource tree under `/caldav/`.
//!
//! Every request is authenticated before its path is classified. Methods a
//! resource does not support, and methods no resource supports, end in the
//! router's fallback goal and answer 405.

use salvo::{Handler, Router};

use slotdav_core::constants::CALDAV_ROUTE_COMPONENT;

use crate::middleware::auth::AuthMiddleware;

pub mod context;
pub mod method;
pub mod path;
pub mod properties;

/// Matches a method salvo has no router shortcut for.
fn extension_method<H: Handler>(name: &'static str, handler: H) -> Router {
    Router::new()
        .filter_fn(move |req, _| req.method().as_str() == name)
        .goal(handler)
}

#[must_use]
pub fn routes() -> Router {
    let resources = Router::with_path("{**rest}")
        .options(method::options::options)
        .get(method::get_head::get)
        .head(method::get_head::head)
        .put(method::put::put)
        .delete(method::delete::delete)
        .push(extension_method("PROPFIND", method::propfind::propfind))
        .push(extension_method("REPORT", method::report::report))
        .goal(method::unsupported::unsupported);

    Router::with_path(CALDAV_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .push(resources)
}
