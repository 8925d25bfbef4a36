// App-specific API handlers: health check and token administration.

use salvo::Router;

use slotdav_core::constants::API_ROUTE_COMPONENT;

mod healthcheck;
pub mod tokens;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(tokens::routes())
}
