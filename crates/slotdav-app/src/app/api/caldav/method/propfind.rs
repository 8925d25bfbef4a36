//! PROPFIND method handler.

use salvo::{Depot, Request, Response, handler};
use slotdav_rfc::error::RfcError;
use slotdav_rfc::rfc::dav::core::{Depth, Multistatus, PropfindRequest};
use slotdav_rfc::rfc::dav::parse::parse_propfind;
use slotdav_service::calendar::{get_event, list_events};
use slotdav_service::error::{ServiceError, ServiceResult};

use super::event_response;
use crate::app::api::caldav::context::DavContext;
use crate::app::api::caldav::path::DavTarget;
use crate::app::api::caldav::properties::{
    collection_properties, home_properties, principal_properties, root_properties,
    select_properties,
};
use crate::app::api::response::write_multistatus;

/// ## Summary
/// Handles PROPFIND on every resource of the `CalDAV` tree.
///
/// The calendar home and the collection list their children unless the request
/// carries `Depth: 0`.
///
/// ## Errors
/// Answers with a multistatus body carrying 400 for a malformed body, 404 for
/// unknown resources and 500 for store failures.
#[handler]
#[tracing::instrument(skip_all, fields(method = "PROPFIND", path = %req.uri().path()))]
pub async fn propfind(req: &mut Request, res: &mut Response, depot: &Depot) {
    let Some(ctx) = DavContext::load(req, depot, res).await else {
        return;
    };

    let depth = Depth::from_optional_header(
        req.headers()
            .get("Depth")
            .and_then(|value| value.to_str().ok()),
    );
    tracing::debug!(?depth, target = ?ctx.target, "PROPFIND request");

    let request = match req.payload().await {
        Ok(body) => parse_propfind(body).map_err(|e| ServiceError::from(RfcError::from(e))),
        Err(e) => Err(ServiceError::ValidationError(format!(
            "unreadable request body: {e}"
        ))),
    };

    let result = match request {
        Ok(request) => build_multistatus(&ctx, &request, depth).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(multistatus) => {
            tracing::debug!(responses = multistatus.len(), "PROPFIND answered");
            write_multistatus(res, &multistatus);
        }
        Err(e) => ctx.fail(req, res, &e),
    }
}

async fn build_multistatus(
    ctx: &DavContext,
    request: &PropfindRequest,
    depth: Depth,
) -> ServiceResult<Multistatus> {
    let mut multistatus = Multistatus::new();
    let store = ctx.gateway.store.as_ref();
    let permissions = ctx.token.permissions;

    match &ctx.target {
        DavTarget::Root => {
            multistatus.add_response(select_properties(
                ctx.root_href(),
                root_properties(ctx),
                request,
            ));
        }
        DavTarget::Principal(_) => {
            multistatus.add_response(select_properties(
                ctx.principal_href(),
                principal_properties(ctx),
                request,
            ));
        }
        DavTarget::CalendarHome => {
            multistatus.add_response(select_properties(
                ctx.home_href(),
                home_properties(ctx),
                request,
            ));
            if depth.includes_children() {
                let events = list_events(store, &ctx.meta, permissions, None).await?;
                multistatus.add_response(select_properties(
                    ctx.collection_href(),
                    collection_properties(ctx, &events),
                    request,
                ));
            }
        }
        DavTarget::Collection(_) => {
            let events = list_events(store, &ctx.meta, permissions, None).await?;
            multistatus.add_response(select_properties(
                ctx.collection_href(),
                collection_properties(ctx, &events),
                request,
            ));
            if depth.includes_children() {
                for event in &events {
                    multistatus.add_response(event_response(ctx, event, request));
                }
            }
        }
        DavTarget::Event { name, .. } => {
            let event = get_event(store, &ctx.meta, permissions, name).await?;
            multistatus.add_response(event_response(ctx, &event, request));
        }
        DavTarget::Unknown => return Err(ServiceError::NotFound(ctx.path.clone())),
    }

    Ok(multistatus)
}
