pub mod app_specific;
pub mod caldav;
pub mod feed;
pub mod response;
pub mod well_known;

use salvo::Router;

/// ## Summary
/// Constructs the gateway router: service discovery, the app API, the
/// subscription feed and the `CalDAV` tree.
///
/// Paths are relative; the transport adapters decide the mount prefix.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(well_known::routes())
        .push(app_specific::routes())
        .push(feed::routes())
        .push(caldav::routes())
}
