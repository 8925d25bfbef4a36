#![allow(clippy::unused_async, unused_must_use)]
//! Tests for GET and HEAD on events and the collection.

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// Test that a busy event is served as an opaque, labelled `VEVENT`.
#[test_log::test(tokio::test)]
async fn get_busy_event() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("Content-Type", "text/calendar")
        .assert_header_exists("ETag")
        .assert_header_exists("Last-Modified")
        .assert_body_contains("UID:busy-b1\r\n")
        .assert_body_contains("CATEGORIES:BUSY\r\n")
        .assert_body_contains("TRANSP:OPAQUE\r\n")
        .assert_body_contains("SUMMARY:BESETZT: Lunch\r\n")
        .assert_body_not_contains("METHOD:");
}

/// ## Summary
/// Test that an appointment carries customer, contact and price.
#[test_log::test(tokio::test)]
async fn get_appointment_event() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get(&event_path("apt-a1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("SUMMARY:Termin: Anna Schmidt\r\n")
        .assert_body_contains("CATEGORIES:APPOINTMENT\r\n")
        .assert_body_contains("DTSTART:20250110T100000Z\r\n")
        .assert_body_contains("DTEND:20250110T110000Z\r\n")
        .assert_body_contains("45.50 EUR")
        .assert_body_not_contains("TRANSP:");
}

/// ## Summary
/// Test that a matching If-None-Match answers 304 without a body.
#[test_log::test(tokio::test)]
async fn conditional_get_is_not_modified() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let response = TestRequest::get(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    let etag = response.get_etag().expect("ETag header").to_string();

    TestRequest::get(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .if_none_match(&etag)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_MODIFIED)
        .assert_header("ETag", &etag)
        .assert_body_empty();

    TestRequest::get(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .if_none_match("\"stale\"")
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
}

/// ## Summary
/// Test that HEAD answers like GET without a body.
#[test_log::test(tokio::test)]
async fn head_has_no_body() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    let etag = TestRequest::get(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .get_etag()
        .expect("ETag header")
        .to_string();

    TestRequest::head(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("ETag", &etag)
        .assert_body_empty();
}

/// ## Summary
/// Test that GET on the collection serves the whole visible calendar.
#[test_log::test(tokio::test)]
async fn get_collection_serves_calendar() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get(COLLECTION_PATH)
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_exists("ETag")
        .assert_body_contains("BEGIN:VCALENDAR\r\n")
        .assert_body_contains("UID:apt-a1\r\n")
        .assert_body_contains("UID:busy-b1\r\n");
}

/// ## Summary
/// Test that events outside the token's scope are missing and never queried.
#[test_log::test(tokio::test)]
async fn out_of_scope_events_are_not_found() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get(&event_path("busy-b1.ics"))
        .basic(APPOINTMENTS_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(fixture.counting.busy_calls(), 0);

    TestRequest::get(&event_path("apt-a1.ics"))
        .basic(BUSY_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(fixture.counting.appointment_calls(), 0);
}

/// ## Summary
/// Test that a missing event answers 404.
#[test_log::test(tokio::test)]
async fn missing_event_is_not_found() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get(&event_path("busy-zzz.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
