//! Business layer of the slotdav gateway: token authentication, calendar
//! aggregation, the mutation gate and token administration.

pub mod auth;
pub mod calendar;
pub mod error;
pub mod gateway;
pub mod mutation;
pub mod naming;
pub mod settings;
pub mod tokens;

pub use gateway::Gateway;
