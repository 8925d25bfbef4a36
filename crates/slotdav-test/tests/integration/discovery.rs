#![allow(clippy::unused_async, unused_must_use)]
//! Tests for service discovery, OPTIONS and unsupported methods.

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// Test that the well-known URI redirects to the `CalDAV` root without credentials.
#[test_log::test(tokio::test)]
async fn well_known_redirects_to_root() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get("/.well-known/caldav")
        .send(&service)
        .await
        .assert_status(StatusCode::MOVED_PERMANENTLY)
        .assert_header("Location", "/caldav/");

    TestRequest::propfind("/.well-known/caldav")
        .send(&service)
        .await
        .assert_status(StatusCode::MOVED_PERMANENTLY);
}

/// ## Summary
/// Test that the health check is open.
#[test_log::test(tokio::test)]
async fn healthcheck_is_open() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get("/api/healthcheck")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}

/// ## Summary
/// Test that OPTIONS advertises calendar-access and the allowed methods.
#[test_log::test(tokio::test)]
async fn options_advertises_capabilities() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::options(COLLECTION_PATH)
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("DAV", "1, calendar-access")
        .assert_header_contains("Allow", "REPORT");

    TestRequest::options(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("Allow", "PUT")
        .assert_header_contains("Allow", "DELETE");

    TestRequest::options("/caldav/addressbooks/")
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Test that the root PROPFIND points at the principal and the calendar home.
#[test_log::test(tokio::test)]
async fn root_propfind_links_principal_and_home() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let principal = format!("/caldav/principals/{}/", fixture.t1.id);

    TestRequest::propfind("/caldav/")
        .basic(T1_SECRET)
        .depth("0")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<D:current-user-principal>")
        .assert_body_contains(&principal)
        .assert_body_contains("<C:calendar-home-set>")
        .assert_body_contains("/caldav/calendars/");
}

/// ## Summary
/// Test that a token sees its own principal and nobody else's.
#[test_log::test(tokio::test)]
async fn principal_is_scoped_to_token() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::propfind(&format!("/caldav/principals/{}/", fixture.t1.id))
        .basic(T1_SECRET)
        .depth("0")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains("<D:displayname>T1</D:displayname>");

    TestRequest::propfind(&format!(
        "/caldav/principals/{}/",
        fixture.appointments_only.id
    ))
    .basic(T1_SECRET)
    .depth("0")
    .send(&service)
    .await
    .assert_status(StatusCode::NOT_FOUND)
    .assert_body_contains("<D:multistatus");
}

/// ## Summary
/// Test that the calendar home lists the single collection at depth 1.
#[test_log::test(tokio::test)]
async fn home_lists_collection() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let response = TestRequest::propfind("/caldav/calendars/")
        .basic(T1_SECRET)
        .depth("1")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_body_contains(COLLECTION_PATH);
    assert_eq!(response.count_multistatus_responses(), 2);

    let response = TestRequest::propfind("/caldav/calendars/")
        .basic(T1_SECRET)
        .depth("0")
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS);
    assert_eq!(response.count_multistatus_responses(), 1);
}

/// ## Summary
/// Test that unknown paths and other calendars answer 404.
#[test_log::test(tokio::test)]
async fn unknown_paths_are_not_found() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::propfind("/caldav/addressbooks/")
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("<D:multistatus");

    TestRequest::get("/caldav/calendars/other/busy-b1.ics")
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Test that collection-management methods are refused with an Allow header.
#[test_log::test(tokio::test)]
async fn management_methods_are_not_allowed() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    for method in ["PROPPATCH", "MKCOL", "MKCALENDAR", "COPY", "MOVE"] {
        TestRequest::method(method, COLLECTION_PATH)
            .basic(T1_SECRET)
            .send(&service)
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED)
            .assert_header("Allow", "OPTIONS, PROPFIND, REPORT, GET, HEAD");
    }
}

/// ## Summary
/// Test that GET on a non-calendar resource is refused.
#[test_log::test(tokio::test)]
async fn get_on_root_is_not_allowed() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get("/caldav/")
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED)
        .assert_header("Allow", "OPTIONS, PROPFIND");
}
