#![allow(clippy::unused_async, unused_must_use)]
//! Tests for PROPFIND on the calendar collection and its events.

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// Test that a depth-1 PROPFIND lists the collection and every visible event.
#[test_log::test(tokio::test)]
async fn collection_depth_one_lists_events() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let response = TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("1")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_header_contains("Content-Type", "xml")
        .assert_body_contains("<D:href>/caldav/calendars/default/</D:href>")
        .assert_body_contains("<D:href>/caldav/calendars/default/apt-a1.ics</D:href>")
        .assert_body_contains("<D:href>/caldav/calendars/default/busy-b1.ics</D:href>");

    assert_eq!(response.count_multistatus_responses(), 3);
}

/// ## Summary
/// Test that a missing Depth header behaves like depth 1.
#[test_log::test(tokio::test)]
async fn missing_depth_includes_children() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let response = TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS);

    assert_eq!(response.count_multistatus_responses(), 3);
}

/// ## Summary
/// Test that a depth-0 PROPFIND describes the collection only.
#[test_log::test(tokio::test)]
async fn collection_depth_zero_describes_collection() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let response = TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("0")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<C:calendar/>")
        .assert_body_contains("<D:collection/>")
        .assert_body_contains("<CS:getctag>")
        .assert_body_contains("<C:comp name=\"VEVENT\"/>")
        .assert_body_not_contains("apt-a1.ics");

    assert_eq!(response.count_multistatus_responses(), 1);
}

/// ## Summary
/// Test that the collection tag changes when a busy slot changes.
#[test_log::test(tokio::test)]
async fn collection_tag_follows_changes() {
    let fixture = Fixture::new().await;
    let service = fixture.service();
    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<D:propfind xmlns:D="DAV:" xmlns:CS="http://calendarserver.org/ns/">
  <D:prop><CS:getctag/></D:prop>
</D:propfind>"#;

    let before = TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("0")
        .xml_body(body)
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .body_string();

    TestRequest::put(&event_path("busy-new.ics"))
        .basic(T1_SECRET)
        .icalendar_body(&busy_event(
            "busy-new",
            "BESETZT: Dentist",
            "20250111T080000Z",
            "20250111T090000Z",
        ))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let after = TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("0")
        .xml_body(body)
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .body_string();

    assert!(before.contains("<CS:getctag>"));
    assert_ne!(before, after);
}

/// ## Summary
/// Test that an appointments-only token never sees busy events.
#[test_log::test(tokio::test)]
async fn listing_respects_token_scope() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let response = TestRequest::propfind(COLLECTION_PATH)
        .basic(APPOINTMENTS_SECRET)
        .depth("1")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("apt-a1.ics")
        .assert_body_not_contains("busy-b1.ics")
        .assert_body_not_contains("<D:write/>");

    assert_eq!(response.count_multistatus_responses(), 2);
    assert_eq!(fixture.counting.busy_calls(), 0);
}

/// ## Summary
/// Test that a token with busy_slots is granted write privileges.
#[test_log::test(tokio::test)]
async fn writable_tokens_see_write_privilege() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("0")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<D:read/>")
        .assert_body_contains("<D:write/>");
}

/// ## Summary
/// Test that requested properties the resource lacks come back as 404 propstat.
#[test_log::test(tokio::test)]
async fn unknown_properties_are_reported_missing() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("0")
        .xml_body(&propfind_props(&["displayname", "quota-used-bytes"]))
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<D:displayname>Termine</D:displayname>")
        .assert_body_contains("<D:quota-used-bytes/>")
        .assert_body_contains("HTTP/1.1 404 Not Found");
}

/// ## Summary
/// Test that an event PROPFIND reports its metadata but not its data by default.
#[test_log::test(tokio::test)]
async fn event_propfind_reports_metadata() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let response = TestRequest::propfind(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .depth("0")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<D:getetag>")
        .assert_body_contains("<D:getcontenttype>text/calendar")
        .assert_body_contains("<D:getlastmodified>")
        .assert_body_not_contains("<C:calendar-data>");

    assert_eq!(response.count_multistatus_responses(), 1);
}

/// ## Summary
/// Test that calendar-data is returned when explicitly requested.
#[test_log::test(tokio::test)]
async fn event_propfind_can_include_data() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<D:propfind xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
  <D:prop>
    <D:getetag/>
    <C:calendar-data/>
  </D:prop>
</D:propfind>"#;

    TestRequest::propfind(&event_path("apt-a1.ics"))
        .basic(T1_SECRET)
        .depth("0")
        .xml_body(body)
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<C:calendar-data>")
        .assert_body_contains("SUMMARY:Termin: Anna Schmidt");
}

/// ## Summary
/// Test that propname lists names without values.
#[test_log::test(tokio::test)]
async fn propname_lists_names_only() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let body = r#"<?xml version="1.0" encoding="utf-8"?>
<D:propfind xmlns:D="DAV:"><D:propname/></D:propfind>"#;

    TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("0")
        .xml_body(body)
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<D:displayname/>")
        .assert_body_not_contains("Termine");
}

/// ## Summary
/// Test that a missing event answers 404.
#[test_log::test(tokio::test)]
async fn missing_event_is_not_found() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::propfind(&event_path("busy-nope.ics"))
        .basic(T1_SECRET)
        .depth("0")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Test that malformed XML answers 400.
#[test_log::test(tokio::test)]
async fn malformed_body_is_rejected() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .depth("0")
        .xml_body(r#"<D:propfind xmlns:D="DAV:"><D:prop></D:propfind>"#)
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
