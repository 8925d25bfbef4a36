//! Protocol-level code for the slotdav gateway: the iCalendar codec and the
//! `WebDAV`/`CalDAV` XML types, parsers and serializers.

pub mod error;
pub mod rfc;
