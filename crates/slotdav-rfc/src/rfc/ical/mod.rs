//! iCalendar (RFC 5545) codec for calendar events.
//!
//! Covers the subset of the format calendar clients exchange with the gateway:
//! single `VEVENT` objects with UTC instants and text properties. Recurrence rules,
//! `VTIMEZONE` components and multi-event bodies are out of scope.

mod build;
mod codec;
pub mod datetime;
pub mod escape;
pub mod fold;
pub mod lexer;
mod parse;


pub use build::{encode_calendar, encode_event};
pub use codec::{EventCodec, LenientCodec, METHOD_PUBLISH};
pub use parse::{DecodedEvent, decode_event};
