//! Fallback for methods the addressed resource does not answer.

use salvo::{Depot, Request, Response, handler};

use crate::app::api::caldav::context::DavContext;
use crate::app::api::response::write_method_not_allowed;

/// ## Summary
/// Answers 405 with the `Allow` list of the addressed resource.
///
/// Covers PROPPATCH, MKCOL, MKCALENDAR, COPY, MOVE, unknown methods, and known
/// methods on resources that do not support them.
#[handler]
#[tracing::instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
pub async fn unsupported(req: &mut Request, res: &mut Response, depot: &Depot) {
    let Some(ctx) = DavContext::load(req, depot, res).await else {
        return;
    };

    tracing::debug!(target = ?ctx.target, "Method not allowed");
    write_method_not_allowed(res, ctx.target.allow());
}
