use std::sync::Arc;

use salvo::async_trait;
use slotdav_core::error::CoreError;
use slotdav_service::Gateway;

use crate::error::AppResult;

/// Injects the shared [`Gateway`] into every request's depot.
pub struct GatewayHandler {
    pub gateway: Arc<Gateway>,
}

#[async_trait]
impl salvo::Handler for GatewayHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.gateway));
    }
}

/// ## Summary
/// Retrieves the gateway from the depot.
///
/// ## Errors
/// Returns an error if the gateway is not found in the depot.
pub fn get_gateway_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Gateway>> {
    depot
        .obtain::<Arc<Gateway>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Gateway not found in depot").into())
}

/// Route prefix the gateway is mounted under; empty when standalone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteBase(pub String);

/// Injects the [`RouteBase`] used to build absolute hrefs.
pub struct RouteBaseHandler {
    pub base: RouteBase,
}

#[async_trait]
impl salvo::Handler for RouteBaseHandler {
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.base.clone());
    }
}

/// Returns the route base, or the empty base if none was injected.
#[must_use]
pub fn get_route_base_from_depot(depot: &salvo::Depot) -> String {
    depot
        .obtain::<RouteBase>()
        .map(|base| base.0.clone())
        .unwrap_or_default()
}
