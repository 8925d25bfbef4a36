//! Method handlers for the `CalDAV` resource tree.

pub mod delete;
pub mod get_head;
pub mod options;
pub mod propfind;
pub mod put;
pub mod report;
pub mod unsupported;

use slotdav_core::types::CalendarEvent;
use slotdav_rfc::rfc::dav::core::{PropfindRequest, PropstatResponse};

use super::context::DavContext;
use super::properties::{event_properties, select_properties};

/// iCalendar object served for a single event resource.
#[must_use]
pub fn calendar_data(ctx: &DavContext, event: &CalendarEvent) -> String {
    ctx.gateway
        .codec
        .encode_calendar(std::slice::from_ref(event), &ctx.meta, None)
}

/// Multistatus response for one event resource.
#[must_use]
pub fn event_response(
    ctx: &DavContext,
    event: &CalendarEvent,
    request: &PropfindRequest,
) -> PropstatResponse {
    let data = calendar_data(ctx, event);
    select_properties(
        ctx.event_href(&event.resource_name()),
        event_properties(ctx, event, &data),
        request,
    )
}
