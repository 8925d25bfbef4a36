//! Shared configuration, constants and domain types for the slotdav gateway.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
