//! Deployment adapters over the shared router.
//!
//! Both adapters inject the same per-request state (configuration, gateway, route
//! base) and differ only in the prefix the routes are nested under.

use std::sync::Arc;

use salvo::Router;
use slotdav_core::config::{ServerMode, Settings, normalize_base_path};
use slotdav_service::Gateway;

use crate::app::api::routes;
use crate::config::ConfigHandler;
use crate::gateway_handler::{GatewayHandler, RouteBase, RouteBaseHandler};

fn with_state(router: Router, settings: Settings, gateway: Arc<Gateway>, base: String) -> Router {
    router
        .hoop(ConfigHandler::new(settings))
        .hoop(GatewayHandler { gateway })
        .hoop(RouteBaseHandler {
            base: RouteBase(base),
        })
}

/// ## Summary
/// Router for a dedicated listener: every path sits at the root.
#[must_use]
pub fn standalone_router(settings: Settings, gateway: Arc<Gateway>) -> Router {
    with_state(Router::new(), settings, gateway, String::new()).push(routes())
}

/// ## Summary
/// Router for colocation with a host application: every path sits under `prefix`.
///
/// The prefix is normalized, so `booking/`, `/booking` and `/booking/` are
/// equivalent. An empty prefix behaves like [`standalone_router`].
#[must_use]
pub fn mounted_router(prefix: &str, settings: Settings, gateway: Arc<Gateway>) -> Router {
    let base = normalize_base_path(prefix);
    if base.is_empty() {
        return standalone_router(settings, gateway);
    }

    let nested = Router::with_path(base.trim_start_matches('/')).push(routes());
    with_state(Router::new(), settings, gateway, base).push(nested)
}

/// ## Summary
/// Picks the adapter named by `server.mode`.
#[must_use]
pub fn router_for(settings: Settings, gateway: Arc<Gateway>) -> Router {
    match settings.server.mode {
        ServerMode::Standalone => standalone_router(settings, gateway),
        ServerMode::Mounted => {
            let prefix = settings.server.base_path.clone();
            mounted_router(&prefix, settings, gateway)
        }
    }
}
