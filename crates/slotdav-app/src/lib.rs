//! HTTP layer of the slotdav gateway.

pub mod app;
pub mod config;
pub mod error;
pub mod gateway_handler;
pub mod middleware;
pub mod transport;
