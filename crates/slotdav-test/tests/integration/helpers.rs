#![allow(clippy::unused_async, clippy::expect_used, dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, TimeZone, Utc};
use salvo::http::header::{HeaderMap, HeaderName};
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{RequestBuilder, ResponseExt};

use slotdav_test::app::transport::{mounted_router, standalone_router};
use slotdav_test::component::config::*;
use slotdav_test::component::service::Gateway;
use slotdav_test::component::service::settings::ConfigSettingsProvider;
use slotdav_test::component::store::model::{
    Appointment, AppointmentStatus, BusySlot, BusySlotFields, CalendarToken, CreatedToken,
    DateRange, NewToken, Upserted,
};
use slotdav_test::component::store::{InMemoryStore, SchedulingStore, StoreFuture};
use slotdav_test::component::types::{Permission, Permissions};

pub use tracing;

pub const T1_SECRET: &str = "t1-secret-both";
pub const APPOINTMENTS_SECRET: &str = "t2-secret-appointments";
pub const BUSY_SECRET: &str = "t3-secret-busy";
pub const EXPIRED_SECRET: &str = "t4-secret-expired";
pub const INACTIVE_SECRET: &str = "t5-secret-inactive";
pub const ADMIN_SECRET: &str = "admin-secret";

pub const COLLECTION_PATH: &str = "/caldav/calendars/default/";

fn test_config(mode: ServerMode, base_path: &str, admin_secret: Option<&str>) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8698,
            public_origin: None,
            mode,
            base_path: base_path.to_string(),
        },
        auth: AuthConfig {
            realm: "slotdav".to_string(),
            admin_secret: admin_secret.map(str::to_string),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        calendar: CalendarConfig::default(),
        store: StoreConfig::default(),
    }
}

#[must_use]
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0)
        .single()
        .expect("valid fixture instant")
}

#[must_use]
pub fn event_path(resource_name: &str) -> String {
    format!("{COLLECTION_PATH}{resource_name}")
}

/// ## Summary
/// Store wrapper counting every call, to prove which requests reach persistence.
pub struct CountingStore {
    inner: Arc<InMemoryStore>,
    calls: AtomicUsize,
    appointment_calls: AtomicUsize,
    busy_calls: AtomicUsize,
}

impl CountingStore {
    #[must_use]
    pub fn new(inner: Arc<InMemoryStore>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            appointment_calls: AtomicUsize::new(0),
            busy_calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn appointment_calls(&self) -> usize {
        self.appointment_calls.load(Ordering::SeqCst)
    }

    /// Busy slot reads and writes.
    #[must_use]
    pub fn busy_calls(&self) -> usize {
        self.busy_calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn count_appointments(&self) {
        self.count();
        self.appointment_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn count_busy(&self) {
        self.count();
        self.busy_calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl SchedulingStore for CountingStore {
    fn list_appointments<'a>(
        &'a self,
        range: Option<DateRange>,
    ) -> StoreFuture<'a, Vec<Appointment>> {
        self.count_appointments();
        self.inner.list_appointments(range)
    }

    fn get_appointment<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Option<Appointment>> {
        self.count_appointments();
        self.inner.get_appointment(id)
    }

    fn list_busy_slots<'a>(&'a self, range: Option<DateRange>) -> StoreFuture<'a, Vec<BusySlot>> {
        self.count_busy();
        self.inner.list_busy_slots(range)
    }

    fn get_busy_slot<'a>(&'a self, id: &'a str) -> StoreFuture<'a, Option<BusySlot>> {
        self.count_busy();
        self.inner.get_busy_slot(id)
    }

    fn upsert_busy_slot<'a>(
        &'a self,
        id: &'a str,
        fields: BusySlotFields,
    ) -> StoreFuture<'a, Upserted> {
        self.count_busy();
        self.inner.upsert_busy_slot(id, fields)
    }

    fn delete_busy_slot<'a>(&'a self, id: &'a str) -> StoreFuture<'a, bool> {
        self.count_busy();
        self.inner.delete_busy_slot(id)
    }

    fn validate_token<'a>(&'a self, secret: &'a str) -> StoreFuture<'a, Option<CalendarToken>> {
        self.count();
        self.inner.validate_token(secret)
    }

    fn touch_token_last_used<'a>(
        &'a self,
        id: uuid::Uuid,
        at: DateTime<Utc>,
    ) -> StoreFuture<'a, ()> {
        self.count();
        self.inner.touch_token_last_used(id, at)
    }

    fn create_token<'a>(&'a self, token: NewToken) -> StoreFuture<'a, CreatedToken> {
        self.count();
        self.inner.create_token(token)
    }

    fn list_tokens<'a>(&'a self) -> StoreFuture<'a, Vec<CalendarToken>> {
        self.count();
        self.inner.list_tokens()
    }

    fn set_token_active<'a>(&'a self, id: uuid::Uuid, active: bool) -> StoreFuture<'a, bool> {
        self.count();
        self.inner.set_token_active(id, active)
    }

    fn delete_token<'a>(&'a self, id: uuid::Uuid) -> StoreFuture<'a, bool> {
        self.count();
        self.inner.delete_token(id)
    }
}

/// ## Summary
/// Seeded store plus the services built on it.
///
/// Holds token T1 (both permissions), an appointments-only token, a busy-only
/// token, an expired and an inactive token; appointment `a1` on 2025-01-10
/// 10:00 for 60 minutes and busy slot `b1` 13:00-14:00 titled "Lunch".
pub struct Fixture {
    pub store: Arc<InMemoryStore>,
    pub counting: Arc<CountingStore>,
    pub t1: CalendarToken,
    pub appointments_only: CalendarToken,
}

impl Fixture {
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());

        store
            .insert_appointment(Appointment {
                id: "a1".to_string(),
                customer_name: "Anna Schmidt".to_string(),
                customer_contact: Some("anna@example.com".to_string()),
                start: at(10, 10),
                duration_minutes: 60,
                price_minor: Some(4550),
                status: AppointmentStatus::Confirmed,
                notes: None,
                updated_at: at(1, 9),
            })
            .await;
        store
            .insert_busy_slot(BusySlot {
                id: "b1".to_string(),
                start: at(10, 13),
                end: at(10, 14),
                title: "Lunch".to_string(),
                description: None,
                updated_at: at(1, 9),
            })
            .await;

        let t1 = store
            .insert_token_with_secret(new_token("T1", Permissions::all(), None), T1_SECRET)
            .await;
        let appointments_only = store
            .insert_token_with_secret(
                new_token("Appointments", [Permission::Appointments].into_iter().collect(), None),
                APPOINTMENTS_SECRET,
            )
            .await;
        store
            .insert_token_with_secret(
                new_token("Busy", [Permission::BusySlots].into_iter().collect(), None),
                BUSY_SECRET,
            )
            .await;
        store
            .insert_token_with_secret(
                new_token(
                    "Expired",
                    Permissions::all(),
                    Some(Utc::now() - chrono::Duration::minutes(1)),
                ),
                EXPIRED_SECRET,
            )
            .await;
        let inactive = store
            .insert_token_with_secret(
                new_token("Inactive", Permissions::all(), None),
                INACTIVE_SECRET,
            )
            .await;
        store
            .set_token_active(inactive.id, false)
            .await
            .expect("deactivate fixture token");

        let counting = Arc::new(CountingStore::new(Arc::clone(&store)));

        Self {
            store,
            counting,
            t1,
            appointments_only,
        }
    }

    fn gateway(&self) -> Arc<Gateway> {
        Arc::new(Gateway::new(
            Arc::clone(&self.counting) as Arc<dyn SchedulingStore>,
            Arc::new(ConfigSettingsProvider::new(CalendarConfig::default())),
        ))
    }

    /// Standalone service without the token administration API.
    #[must_use]
    pub fn service(&self) -> Service {
        let settings = test_config(ServerMode::Standalone, "", None);
        Service::new(standalone_router(settings, self.gateway()))
    }

    /// Standalone service with the token administration API enabled.
    #[must_use]
    pub fn admin_service(&self) -> Service {
        let settings = test_config(ServerMode::Standalone, "", Some(ADMIN_SECRET));
        Service::new(standalone_router(settings, self.gateway()))
    }

    /// Service nested under `prefix`.
    #[must_use]
    pub fn mounted_service(&self, prefix: &str) -> Service {
        let settings = test_config(ServerMode::Mounted, prefix, None);
        Service::new(mounted_router(prefix, settings, self.gateway()))
    }
}

fn new_token(
    name: &str,
    permissions: Permissions,
    expires_at: Option<DateTime<Utc>>,
) -> NewToken {
    NewToken {
        name: name.to_string(),
        description: None,
        permissions,
        expires_at,
    }
}

/// A request against the in-process router, built up fluently.
pub struct TestRequest {
    builder: RequestBuilder,
}

impl TestRequest {
    fn with_method(method: Method, path: &str) -> Self {
        Self {
            builder: RequestBuilder::new(format!("http://127.0.0.1:8698{path}"), method),
        }
    }

    #[must_use]
    pub fn options(path: &str) -> Self {
        Self::with_method(Method::OPTIONS, path)
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::with_method(Method::GET, path)
    }

    #[must_use]
    pub fn head(path: &str) -> Self {
        Self::with_method(Method::HEAD, path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::with_method(Method::PUT, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::with_method(Method::POST, path)
    }

    #[must_use]
    pub fn patch(path: &str) -> Self {
        Self::with_method(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::with_method(Method::DELETE, path)
    }

    /// Any method by name, including WebDAV extensions like MKCOL.
    #[must_use]
    pub fn method(name: &str, path: &str) -> Self {
        let method = Method::from_bytes(name.as_bytes()).expect("method token");
        Self::with_method(method, path)
    }

    #[must_use]
    pub fn propfind(path: &str) -> Self {
        Self::method("PROPFIND", path)
    }

    #[must_use]
    pub fn report(path: &str) -> Self {
        Self::method("REPORT", path)
    }

    #[must_use]
    pub fn header(self, name: &str, value: &str) -> Self {
        let name = HeaderName::from_bytes(name.as_bytes()).expect("header name");
        Self {
            builder: self.builder.add_header(name, value.to_owned(), true),
        }
    }

    /// Basic credentials with the token secret as password.
    #[must_use]
    pub fn basic(self, secret: &str) -> Self {
        let encoded = STANDARD.encode(format!("calendar:{secret}"));
        self.header("Authorization", &format!("Basic {encoded}"))
    }

    #[must_use]
    pub fn bearer(self, secret: &str) -> Self {
        self.header("Authorization", &format!("Bearer {secret}"))
    }

    #[must_use]
    pub fn depth(self, depth: &str) -> Self {
        self.header("Depth", depth)
    }

    #[must_use]
    pub fn if_none_match(self, etag: &str) -> Self {
        self.header("If-None-Match", etag)
    }

    #[must_use]
    pub fn body(self, body: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = body.into();
        Self {
            builder: self.builder.body(ReqBody::Once(bytes.into())),
        }
    }

    #[must_use]
    pub fn xml_body(self, xml: &str) -> Self {
        self.header("Content-Type", "application/xml; charset=utf-8")
            .body(xml)
    }

    #[must_use]
    pub fn icalendar_body(self, ical: &str) -> Self {
        self.header("Content-Type", "text/calendar; charset=utf-8")
            .body(ical)
    }

    #[must_use]
    pub fn json_body(self, json: &serde_json::Value) -> Self {
        self.header("Content-Type", "application/json")
            .body(json.to_string())
    }

    /// Runs the request through `service` and buffers the whole response.
    pub async fn send(self, service: &Service) -> TestResponse {
        let mut response = self.builder.send(service).await;
        let body = response.take_bytes(None).await.unwrap_or_default();
        TestResponse {
            status: response.status_code.unwrap_or(StatusCode::OK),
            headers: response.headers().clone(),
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }
}

/// A buffered response with chainable assertions.
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(self.status, expected, "unexpected status, body:\n{}", self.body);
        self
    }

    #[must_use]
    pub fn assert_header(self, name: &str, expected: &str) -> Self {
        assert_eq!(self.require_header(name), expected, "header {name}");
        self
    }

    #[must_use]
    pub fn assert_header_exists(self, name: &str) -> Self {
        self.require_header(name);
        self
    }

    #[must_use]
    pub fn assert_header_contains(self, name: &str, expected: &str) -> Self {
        let value = self.require_header(name);
        assert!(value.contains(expected), "header {name} is {value:?}, wanted {expected:?} in it");
        self
    }

    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        assert!(self.body.contains(expected), "{expected:?} missing from body:\n{}", self.body);
        self
    }

    #[must_use]
    pub fn assert_body_not_contains(self, unexpected: &str) -> Self {
        assert!(!self.body.contains(unexpected), "{unexpected:?} present in body:\n{}", self.body);
        self
    }

    #[must_use]
    pub fn assert_body_empty(self) -> Self {
        assert!(self.body.is_empty(), "body should be empty:\n{}", self.body);
        self
    }

    #[must_use]
    pub fn body_string(&self) -> String {
        self.body.clone()
    }

    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn get_etag(&self) -> Option<&str> {
        self.get_header("ETag")
    }

    fn require_header(&self, name: &str) -> &str {
        self.get_header(name)
            .unwrap_or_else(|| panic!("no {name} header in response"))
    }

    /// Number of `<D:response>` elements in a multistatus body.
    #[must_use]
    pub fn count_multistatus_responses(&self) -> usize {
        self.body.matches("<D:response>").count()
    }

    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("JSON body")
    }
}

/// A busy event as a client would PUT it.
#[must_use]
pub fn busy_event(uid: &str, summary: &str, start: &str, end: &str) -> String {
    format!(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:{uid}\r\n\
DTSTAMP:20250101T000000Z\r\n\
DTSTART:{start}\r\n\
DTEND:{end}\r\n\
SUMMARY:{summary}\r\n\
CATEGORIES:BUSY\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n"
    )
}

/// An event categorized as an appointment.
#[must_use]
pub fn appointment_event(uid: &str) -> String {
    format!(
        "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:{uid}\r\n\
DTSTART:20250110T100000Z\r\n\
DTEND:20250110T120000Z\r\n\
SUMMARY:Termin: Hijacked\r\n\
CATEGORIES:APPOINTMENT\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n"
    )
}

/// Sample PROPFIND request body for specific DAV properties.
#[must_use]
pub fn propfind_props(props: &[&str]) -> String {
    let prop_elements: String = props
        .iter()
        .map(|name| format!("    <D:{name}/>"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<D:propfind xmlns:D="DAV:" xmlns:C="urn:ietf:params:xml:ns:caldav">
  <D:prop>
{prop_elements}
  </D:prop>
</D:propfind>"#
    )
}

/// Sample calendar-query REPORT body with time-range filter.
#[must_use]
pub fn calendar_query_report_with_range(start: &str, end: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<C:calendar-query xmlns:C="urn:ietf:params:xml:ns:caldav" xmlns:D="DAV:">
  <D:prop>
    <D:getetag/>
    <C:calendar-data/>
  </D:prop>
  <C:filter>
    <C:comp-filter name="VCALENDAR">
      <C:comp-filter name="VEVENT">
        <C:time-range start="{start}" end="{end}"/>
      </C:comp-filter>
    </C:comp-filter>
  </C:filter>
</C:calendar-query>"#
    )
}

/// Sample calendar-multiget REPORT body.
#[must_use]
pub fn calendar_multiget_report(hrefs: &[String]) -> String {
    let href_elements: String = hrefs
        .iter()
        .map(|h| format!("  <D:href>{h}</D:href>"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<C:calendar-multiget xmlns:C="urn:ietf:params:xml:ns:caldav" xmlns:D="DAV:">
  <D:prop>
    <D:getetag/>
    <C:calendar-data/>
  </D:prop>
{href_elements}
</C:calendar-multiget>"#
    )
}
