//! Property sets of the `CalDAV` resources and selection by request.

use slotdav_core::constants::CALENDAR_CONTENT_TYPE;
use slotdav_core::types::{CalendarEvent, Permission};
use slotdav_rfc::rfc::dav::core::{
    DavProperty, Href, PropertyValue, PropfindRequest, PropstatResponse, QName,
    caldav_props, cs_props, dav_props,
};
use slotdav_rfc::rfc::dav::validators::format_http_date;
use slotdav_service::calendar::collection_tag;

use super::context::DavContext;

fn privileges(ctx: &DavContext) -> DavProperty {
    let mut granted = vec![QName::dav("read")];
    if ctx.token.can(Permission::BusySlots) {
        granted.extend([
            QName::dav("write"),
            QName::dav("write-content"),
            QName::dav("bind"),
            QName::dav("unbind"),
        ]);
    }
    DavProperty::with_value(
        dav_props::CURRENT_USER_PRIVILEGE_SET,
        PropertyValue::Privileges(granted),
    )
}

fn principal_links(ctx: &DavContext) -> [DavProperty; 3] {
    [
        DavProperty::href(dav_props::CURRENT_USER_PRINCIPAL, ctx.principal_href()),
        DavProperty::href(dav_props::PRINCIPAL_URL, ctx.principal_href()),
        DavProperty::href(caldav_props::CALENDAR_HOME_SET, ctx.home_href()),
    ]
}

fn supported_reports() -> DavProperty {
    DavProperty::with_value(
        dav_props::SUPPORTED_REPORT_SET,
        PropertyValue::SupportedReports(vec![
            QName::caldav("calendar-query"),
            QName::caldav("calendar-multiget"),
        ]),
    )
}

/// Properties of `/caldav/`.
#[must_use]
pub fn root_properties(ctx: &DavContext) -> Vec<DavProperty> {
    let mut props = vec![DavProperty::resourcetype(vec![QName::dav(
        "collection",
    )])];
    props.extend(principal_links(ctx));
    props.push(supported_reports());
    props
}

/// Properties of the token's principal.
#[must_use]
pub fn principal_properties(ctx: &DavContext) -> Vec<DavProperty> {
    let mut props = vec![
        DavProperty::resourcetype(vec![QName::dav("principal")]),
        DavProperty::text(dav_props::DISPLAYNAME, ctx.token.name.clone()),
    ];
    props.extend(principal_links(ctx));
    props
}

/// Properties of the calendar home.
#[must_use]
pub fn home_properties(ctx: &DavContext) -> Vec<DavProperty> {
    vec![
        DavProperty::resourcetype(vec![QName::dav("collection")]),
        DavProperty::text(dav_props::DISPLAYNAME, ctx.meta.name.clone()),
        DavProperty::href(dav_props::CURRENT_USER_PRINCIPAL, ctx.principal_href()),
        privileges(ctx),
    ]
}

/// Properties of the calendar collection; `events` feed the collection tag.
#[must_use]
pub fn collection_properties(ctx: &DavContext, events: &[CalendarEvent]) -> Vec<DavProperty> {
    vec![
        DavProperty::resourcetype(vec![
            QName::dav("collection"),
            QName::caldav("calendar"),
        ]),
        DavProperty::text(dav_props::DISPLAYNAME, ctx.meta.name.clone()),
        DavProperty::text(
            caldav_props::CALENDAR_DESCRIPTION,
            ctx.meta.description.clone(),
        ),
        DavProperty::with_value(
            caldav_props::SUPPORTED_CALENDAR_COMPONENT_SET,
            PropertyValue::SupportedComponents(vec!["VEVENT".to_string()]),
        ),
        supported_reports(),
        privileges(ctx),
        DavProperty::href(dav_props::CURRENT_USER_PRINCIPAL, ctx.principal_href()),
        DavProperty::text(cs_props::GETCTAG, collection_tag(events)),
    ]
}

/// Properties of an event resource. `calendar_data` is the object's iCalendar text.
#[must_use]
pub fn event_properties(
    ctx: &DavContext,
    event: &CalendarEvent,
    calendar_data: &str,
) -> Vec<DavProperty> {
    vec![
        DavProperty::resourcetype(Vec::new()),
        DavProperty::text(dav_props::GETETAG, event.etag.clone()),
        DavProperty::text(
            dav_props::GETLASTMODIFIED,
            format_http_date(event.last_modified),
        ),
        DavProperty::text(dav_props::GETCONTENTTYPE, CALENDAR_CONTENT_TYPE),
        DavProperty::integer(
            dav_props::GETCONTENTLENGTH,
            i64::try_from(calendar_data.len()).unwrap_or(i64::MAX),
        ),
        privileges(ctx),
        DavProperty::content(caldav_props::CALENDAR_DATA, calendar_data),
    ]
}

/// ## Summary
/// Builds the response for one resource from its available properties.
///
/// `allprop` omits `calendar-data` unless it is explicitly included, `propname`
/// lists names only, and named properties the resource lacks land in a `404`
/// propstat.
#[must_use]
pub fn select_properties(
    href: String,
    available: Vec<DavProperty>,
    request: &PropfindRequest,
) -> PropstatResponse {
    match request {
        PropfindRequest::AllProp { .. } => {
            let found = available
                .into_iter()
                .filter(|p| p.name != caldav_props::CALENDAR_DATA || request.includes(&p.name))
                .collect();
            PropstatResponse::ok(Href::new(href), found)
        }
        PropfindRequest::PropName => {
            let names = available.iter().map(DavProperty::name_only).collect();
            PropstatResponse::ok(Href::new(href), names)
        }
        PropfindRequest::Prop(names) => {
            let mut found = Vec::new();
            let mut not_found = Vec::new();
            for name in names {
                match available.iter().find(|p| &p.name == name) {
                    Some(prop) => found.push(prop.clone()),
                    None => not_found.push(DavProperty::not_found(name.clone())),
                }
            }
            PropstatResponse::with_found_and_not_found(Href::new(href), found, not_found)
        }
    }
}
