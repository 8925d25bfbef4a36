//! Per-request state shared by the `CalDAV` method handlers.

use std::sync::Arc;

use salvo::{Depot, Request, Response};
use slotdav_core::constants::{CALDAV_ROUTE_PREFIX, CALENDARS_ROUTE_PREFIX, PRINCIPALS_ROUTE_PREFIX};
use slotdav_core::types::CalendarMetadata;
use slotdav_rfc::rfc::dav::core::encode_segment;
use slotdav_service::Gateway;
use slotdav_service::auth::{AuthenticatedToken, get_token_from_depot};
use slotdav_service::error::ServiceError;

use super::path::DavTarget;
use crate::app::api::response::{write_service_error, write_text};
use crate::config::get_config_from_depot;
use crate::gateway_handler::{get_gateway_from_depot, get_route_base_from_depot};

pub struct DavContext {
    pub gateway: Arc<Gateway>,
    pub token: AuthenticatedToken,
    pub meta: CalendarMetadata,
    pub realm: String,
    /// Mount prefix, empty when standalone.
    pub base: String,
    pub target: DavTarget,
    /// Path of the request, used as href for the target itself.
    pub path: String,
}

impl DavContext {
    /// ## Summary
    /// Gathers gateway, token, settings and target of a request.
    ///
    /// On failure the response has been written and `None` is returned.
    pub async fn load(req: &Request, depot: &Depot, res: &mut Response) -> Option<Self> {
        let (gateway, config) = match (get_gateway_from_depot(depot), get_config_from_depot(depot)) {
            (Ok(gateway), Ok(config)) => (gateway, config),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!(error = %e, "Request context missing from depot");
                write_text(res, e.status_code(), "Internal Server Error");
                return None;
            }
        };

        let path = req.uri().path().to_string();
        let token = match get_token_from_depot(depot) {
            Ok(token) => token.clone(),
            Err(e) => {
                write_service_error(res, req.method(), &path, &config.auth.realm, &e);
                return None;
            }
        };

        let meta = gateway.metadata().await;
        let rest = req.param::<String>("rest").unwrap_or_default();
        let target =
            DavTarget::from_rest(&rest).scoped(&token.token_id.to_string(), &meta.slug);

        Some(Self {
            gateway,
            token,
            meta,
            realm: config.auth.realm.clone(),
            base: get_route_base_from_depot(depot),
            target,
            path,
        })
    }

    /// Writes the response for a service failure on this request.
    pub fn fail(&self, req: &Request, res: &mut Response, err: &ServiceError) {
        write_service_error(res, req.method(), &self.path, &self.realm, err);
    }

    #[must_use]
    pub fn root_href(&self) -> String {
        format!("{}{CALDAV_ROUTE_PREFIX}/", self.base)
    }

    #[must_use]
    pub fn principal_href(&self) -> String {
        format!("{}{PRINCIPALS_ROUTE_PREFIX}/{}/", self.base, self.token.token_id)
    }

    #[must_use]
    pub fn home_href(&self) -> String {
        format!("{}{CALENDARS_ROUTE_PREFIX}/", self.base)
    }

    #[must_use]
    pub fn collection_href(&self) -> String {
        format!(
            "{}{CALENDARS_ROUTE_PREFIX}/{}/",
            self.base,
            encode_segment(&self.meta.slug)
        )
    }

    /// Href of an event; the resource name is percent-encoded.
    #[must_use]
    pub fn event_href(&self, resource_name: &str) -> String {
        format!("{}{}", self.collection_href(), encode_segment(resource_name))
    }
}
