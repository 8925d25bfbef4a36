use chrono::Utc;
use salvo::Depot;
use tracing::error;

use crate::app::api::response::{write_service_error, write_text};
use crate::config::get_config_from_depot;
use crate::gateway_handler::get_gateway_from_depot;
use slotdav_service::auth::{authenticate, extract_credential, set_token_in_depot};

/// ## Summary
/// Authenticates the calendar token of a request and stores it in the depot.
///
/// The secret comes from the Basic password or the `token` query parameter.
///
/// ## Errors
/// Answers 401 with a Basic challenge when the token is missing or rejected, and
/// 500 when the store cannot be consulted.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                write_text(res, e.status_code(), "Internal Server Error");
                ctrl.skip_rest();
                return;
            }
        };

        let gateway = match get_gateway_from_depot(depot) {
            Ok(gateway) => gateway,
            Err(e) => {
                error!(error = ?e, "Failed to get gateway from depot");
                write_text(res, e.status_code(), "Internal Server Error");
                ctrl.skip_rest();
                return;
            }
        };

        let authorization = req
            .headers()
            .get(salvo::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let query_token = req.query::<String>("token");
        let credential = extract_credential(authorization, query_token.as_deref());

        match authenticate(gateway.store.as_ref(), credential.as_deref(), Utc::now()).await {
            Ok(token) => {
                tracing::debug!(token_id = %token.token_id, "Token authenticated");
                set_token_in_depot(depot, token);
            }
            Err(err) => {
                let href = req.uri().path().to_string();
                write_service_error(res, req.method(), &href, &config.auth.realm, &err);
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Middleware handler for calendar token authentication.
pub struct AuthMiddleware;
