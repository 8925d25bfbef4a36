//! Read-only subscription feed.

use chrono::{DateTime, Utc};
use salvo::{Depot, Request, Response, Router, handler};
use slotdav_core::constants::FEED_ROUTE_COMPONENT;
use slotdav_rfc::rfc::dav::validators::content_etag;
use slotdav_rfc::rfc::ical::METHOD_PUBLISH;
use slotdav_service::Gateway;
use slotdav_service::auth::get_token_from_depot;
use slotdav_service::calendar::{last_modified, list_events, parse_feed_range};
use slotdav_service::error::ServiceResult;

use crate::app::api::response::{
    CalendarDocument, set_header, write_calendar, write_service_error, write_text,
};
use crate::config::get_config_from_depot;
use crate::gateway_handler::get_gateway_from_depot;
use crate::middleware::auth::AuthMiddleware;

/// ## Summary
/// Serves every event visible to the token as one `VCALENDAR` with
/// `METHOD:PUBLISH`.
///
/// `start` and `end` query parameters (`YYYY-MM-DD`) restrict the listed events;
/// `end` includes the whole day.
///
/// ## Errors
/// Answers 400 for malformed dates and 500 if the store fails.
#[handler]
#[tracing::instrument(skip_all, fields(method = "GET", path = %req.uri().path()))]
pub async fn feed(req: &mut Request, res: &mut Response, depot: &Depot) {
    let (gateway, config) = match (get_gateway_from_depot(depot), get_config_from_depot(depot)) {
        (Ok(gateway), Ok(config)) => (gateway, config),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "Request context missing from depot");
            write_text(res, e.status_code(), "Internal Server Error");
            return;
        }
    };
    let path = req.uri().path().to_string();

    match assemble(req, depot, &gateway).await {
        Ok(assembled) => {
            let etag = content_etag(assembled.text.as_bytes());
            set_header(
                res,
                "Cache-Control",
                &format!("private, max-age={}", u64::from(assembled.refresh_minutes) * 60),
            );
            set_header(
                res,
                "Content-Disposition",
                "inline; filename=\"calendar.ics\"",
            );
            let if_none_match = req
                .headers()
                .get("If-None-Match")
                .and_then(|value| value.to_str().ok());
            let document = CalendarDocument {
                text: assembled.text,
                etag: &etag,
                last_modified: assembled.last_modified,
            };
            write_calendar(res, if_none_match, document, true);
        }
        Err(e) => write_service_error(res, req.method(), &path, &config.auth.realm, &e),
    }
}

struct Feed {
    text: String,
    last_modified: Option<DateTime<Utc>>,
    refresh_minutes: u32,
}

async fn assemble(req: &Request, depot: &Depot, gateway: &Gateway) -> ServiceResult<Feed> {
    let token = get_token_from_depot(depot)?;
    let range = parse_feed_range(
        req.query::<String>("start").as_deref(),
        req.query::<String>("end").as_deref(),
    )?;
    let meta = gateway.metadata().await;
    let events = list_events(gateway.store.as_ref(), &meta, token.permissions, range).await?;
    tracing::debug!(count = events.len(), "Feed assembled");

    Ok(Feed {
        text: gateway
            .codec
            .encode_calendar(&events, &meta, Some(METHOD_PUBLISH)),
        last_modified: last_modified(&events),
        refresh_minutes: meta.refresh_interval_minutes,
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(FEED_ROUTE_COMPONENT)
        .hoop(AuthMiddleware)
        .get(feed)
}
