//! GET and HEAD method handlers.

use salvo::{Depot, Request, Response, handler};
use slotdav_service::calendar::{collection_tag, get_event, last_modified, list_events};
use slotdav_service::error::ServiceError;

use super::calendar_data;
use crate::app::api::caldav::context::DavContext;
use crate::app::api::caldav::path::DavTarget;
use crate::app::api::response::{CalendarDocument, write_calendar, write_method_not_allowed};

/// ## Summary
/// Serves an event resource, or the whole calendar for the collection.
#[handler]
#[tracing::instrument(skip_all, fields(method = "GET", path = %req.uri().path()))]
pub async fn get(req: &mut Request, res: &mut Response, depot: &Depot) {
    handle_get_or_head(req, res, depot, true).await;
}

/// ## Summary
/// Same as [`get`] without the body.
#[handler]
#[tracing::instrument(skip_all, fields(method = "HEAD", path = %req.uri().path()))]
pub async fn head(req: &mut Request, res: &mut Response, depot: &Depot) {
    handle_get_or_head(req, res, depot, false).await;
}

async fn handle_get_or_head(req: &Request, res: &mut Response, depot: &Depot, include_body: bool) {
    let Some(ctx) = DavContext::load(req, depot, res).await else {
        return;
    };
    let if_none_match = req
        .headers()
        .get("If-None-Match")
        .and_then(|value| value.to_str().ok());
    let store = ctx.gateway.store.as_ref();

    match &ctx.target {
        DavTarget::Event { name, .. } => {
            match get_event(store, &ctx.meta, ctx.token.permissions, name).await {
                Ok(event) => {
                    let document = CalendarDocument {
                        text: calendar_data(&ctx, &event),
                        etag: &event.etag,
                        last_modified: Some(event.last_modified),
                    };
                    write_calendar(res, if_none_match, document, include_body);
                }
                Err(e) => ctx.fail(req, res, &e),
            }
        }
        DavTarget::Collection(_) => {
            match list_events(store, &ctx.meta, ctx.token.permissions, None).await {
                Ok(events) => {
                    let etag = collection_tag(&events);
                    let document = CalendarDocument {
                        text: ctx.gateway.codec.encode_calendar(&events, &ctx.meta, None),
                        etag: &etag,
                        last_modified: last_modified(&events),
                    };
                    write_calendar(res, if_none_match, document, include_body);
                }
                Err(e) => ctx.fail(req, res, &e),
            }
        }
        DavTarget::Unknown => ctx.fail(req, res, &ServiceError::NotFound(ctx.path.clone())),
        DavTarget::Root | DavTarget::Principal(_) | DavTarget::CalendarHome => {
            write_method_not_allowed(res, ctx.target.allow());
        }
    }
}
