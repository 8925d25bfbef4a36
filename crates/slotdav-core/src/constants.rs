/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const CALDAV_ROUTE_COMPONENT: &str = "caldav";
pub const CALDAV_ROUTE_PREFIX: &str = const_str::concat!("/", CALDAV_ROUTE_COMPONENT);

pub const PRINCIPALS_COMPONENT: &str = "principals";
pub const PRINCIPALS_ROUTE_PREFIX: &str =
    const_str::concat!(CALDAV_ROUTE_PREFIX, "/", PRINCIPALS_COMPONENT);

pub const CALENDARS_COMPONENT: &str = "calendars";
pub const CALENDARS_ROUTE_PREFIX: &str =
    const_str::concat!(CALDAV_ROUTE_PREFIX, "/", CALENDARS_COMPONENT);

pub const FEED_ROUTE_COMPONENT: &str = "feed.ics";

pub const WELL_KNOWN_CALDAV: &str = ".well-known/caldav";

/// Calendar object resource suffix
pub const ICS_EXTENSION: &str = ".ics";

/// Event uid prefixes; they select the backing record collection.
pub const APPOINTMENT_UID_PREFIX: &str = "apt-";
pub const BUSY_SLOT_UID_PREFIX: &str = "busy-";

pub const PRODID: &str = "-//slotdav//Booking Calendar Gateway//EN";

pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Built-in calendar metadata defaults
pub const DEFAULT_CALENDAR_NAME: &str = "Termine";
pub const DEFAULT_CALENDAR_DESCRIPTION: &str = "Appointments and blocked times";
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";
pub const DEFAULT_CALENDAR_SLUG: &str = "default";
pub const DEFAULT_MAX_EVENTS: usize = 1000;
pub const DEFAULT_REFRESH_INTERVAL_MINUTES: u32 = 15;
pub const DEFAULT_APPOINTMENT_LABEL: &str = "Termin";
pub const DEFAULT_BUSY_LABEL: &str = "BESETZT";
pub const DEFAULT_CURRENCY: &str = "EUR";
