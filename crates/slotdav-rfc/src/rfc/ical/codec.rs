use slotdav_core::types::{CalendarEvent, CalendarMetadata};

use super::parse::DecodedEvent;
use crate::error::RfcResult;

/// `METHOD` value of subscription feeds.
pub const METHOD_PUBLISH: &str = "PUBLISH";

/// Converts between derived events and iCalendar text.
///
/// The router only talks to this trait, so a stricter parser can replace
/// [`LenientCodec`] without touching request handling.
pub trait EventCodec: Send + Sync {
    /// Serializes one event as a `VEVENT` block.
    fn encode_event(&self, event: &CalendarEvent) -> String;

    /// Serializes a complete `VCALENDAR`.
    fn encode_calendar(
        &self,
        events: &[CalendarEvent],
        metadata: &CalendarMetadata,
        method: Option<&str>,
    ) -> String;

    /// Decodes a client-supplied event.
    ///
    /// ## Errors
    /// Returns an error if the text does not contain a usable `VEVENT`.
    fn decode_event(&self, text: &str) -> RfcResult<DecodedEvent>;
}

/// Line-oriented codec that ignores everything it does not understand.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientCodec;

impl EventCodec for LenientCodec {
    fn encode_event(&self, event: &CalendarEvent) -> String {
        super::build::encode_event(event)
    }

    fn encode_calendar(
        &self,
        events: &[CalendarEvent],
        metadata: &CalendarMetadata,
        method: Option<&str>,
    ) -> String {
        super::build::encode_calendar(events, metadata, method)
    }

    fn decode_event(&self, text: &str) -> RfcResult<DecodedEvent> {
        super::parse::decode_event(text)
    }
}
