//! Token authentication.
//!
//! ## Module Organization
//!
//! - `authenticate`: Token validation against the scheduling store
//! - `credential`: Credential extraction from Basic auth and the `token` query parameter
//! - `depot`: Depot helpers for the authenticated token

pub mod authenticate;
pub mod credential;
pub mod depot;

pub use authenticate::{AuthenticatedToken, authenticate};
pub use credential::extract_credential;
pub use depot::{get_token_from_depot, set_token_in_depot};
