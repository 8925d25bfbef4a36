//! REPORT method handler.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use slotdav_rfc::error::RfcError;
use slotdav_rfc::rfc::dav::core::{
    CalendarMultiget, CalendarQuery, Href, Multistatus, PropfindRequest, PropstatResponse,
    ReportRequest, ReportType, Status, caldav_props, dav_props,
};
use slotdav_rfc::rfc::dav::parse::parse_report;
use slotdav_service::calendar::{get_event, list_events};
use slotdav_service::error::{ServiceError, ServiceResult};
use slotdav_store::model::DateRange;

use super::event_response;
use crate::app::api::caldav::context::DavContext;
use crate::app::api::caldav::path::DavTarget;
use crate::app::api::response::{write_failure, write_method_not_allowed, write_multistatus};

/// ## Summary
/// Handles `calendar-query` and `calendar-multiget` on the calendar collection.
///
/// ## Errors
/// Unknown resources answer 404, other resources 405. A malformed body answers 400
/// and an unknown report type 501, both as multistatus documents.
#[handler]
#[tracing::instrument(skip_all, fields(method = "REPORT", path = %req.uri().path()))]
pub async fn report(req: &mut Request, res: &mut Response, depot: &Depot) {
    let Some(ctx) = DavContext::load(req, depot, res).await else {
        return;
    };

    match ctx.target {
        DavTarget::Collection(_) => {}
        DavTarget::Unknown => {
            ctx.fail(req, res, &ServiceError::NotFound(ctx.path.clone()));
            return;
        }
        _ => {
            write_method_not_allowed(res, ctx.target.allow());
            return;
        }
    }

    let request = match req.payload().await {
        Ok(body) => parse_report(body).map_err(|e| ServiceError::from(RfcError::from(e))),
        Err(e) => Err(ServiceError::ValidationError(format!(
            "unreadable request body: {e}"
        ))),
    };
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            ctx.fail(req, res, &e);
            return;
        }
    };

    let props = requested_properties(&request);
    let result = match request.report_type {
        ReportType::CalendarQuery(query) => calendar_query(&ctx, &query, &props).await,
        ReportType::CalendarMultiget(multiget) => {
            calendar_multiget(&ctx, &multiget, &props).await
        }
        ReportType::Unsupported(name) => {
            tracing::debug!(report = %name, "Unsupported REPORT");
            write_failure(
                res,
                req.method(),
                &ctx.path,
                StatusCode::NOT_IMPLEMENTED,
                "Not Implemented",
            );
            return;
        }
    };

    match result {
        Ok(multistatus) => {
            tracing::debug!(responses = multistatus.len(), "REPORT answered");
            write_multistatus(res, &multistatus);
        }
        Err(e) => ctx.fail(req, res, &e),
    }
}

/// Properties to return per event; `getetag` and `calendar-data` when none are named.
fn requested_properties(request: &ReportRequest) -> PropfindRequest {
    let named = request.properties();
    if named.is_empty() {
        PropfindRequest::prop(vec![dav_props::GETETAG, caldav_props::CALENDAR_DATA])
    } else {
        PropfindRequest::prop(named.to_vec())
    }
}

async fn calendar_query(
    ctx: &DavContext,
    query: &CalendarQuery,
    props: &PropfindRequest,
) -> ServiceResult<Multistatus> {
    let range = query
        .time_range
        .map(|range| DateRange::new(range.start, range.end));
    let events = list_events(
        ctx.gateway.store.as_ref(),
        &ctx.meta,
        ctx.token.permissions,
        range,
    )
    .await?;

    let mut multistatus = Multistatus::new();
    for event in &events {
        multistatus.add_response(event_response(ctx, event, props));
    }
    Ok(multistatus)
}

async fn calendar_multiget(
    ctx: &DavContext,
    multiget: &CalendarMultiget,
    props: &PropfindRequest,
) -> ServiceResult<Multistatus> {
    let mut multistatus = Multistatus::new();

    for href in &multiget.hrefs {
        let Some(name) = href.last_segment() else {
            multistatus.add_response(not_found(href));
            continue;
        };
        match get_event(
            ctx.gateway.store.as_ref(),
            &ctx.meta,
            ctx.token.permissions,
            &name,
        )
        .await
        {
            Ok(event) => multistatus.add_response(event_response(ctx, &event, props)),
            Err(ServiceError::NotFound(_)) => multistatus.add_response(not_found(href)),
            Err(e) => return Err(e),
        }
    }

    Ok(multistatus)
}

fn not_found(href: &Href) -> PropstatResponse {
    PropstatResponse::status(href.clone(), Status::NOT_FOUND)
}
