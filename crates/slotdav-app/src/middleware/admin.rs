use salvo::Depot;
use salvo::http::StatusCode;

use crate::app::api::response::{set_header, write_text};
use crate::config::get_config_from_depot;

/// ## Summary
/// Guards the token administration API with the configured admin secret.
///
/// Requests must carry `Authorization: Bearer <auth.admin_secret>`. Without a
/// configured secret the API answers 404.
#[salvo::async_trait]
impl salvo::Handler for AdminAuthMiddleware {
    #[tracing::instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let Some(secret) = get_config_from_depot(depot)
            .ok()
            .and_then(|cfg| cfg.auth.admin_secret.clone())
            .filter(|s| !s.is_empty())
        else {
            tracing::debug!("Token administration disabled");
            write_text(res, StatusCode::NOT_FOUND, "Not Found");
            ctrl.skip_rest();
            return;
        };

        let presented = req
            .headers()
            .get(salvo::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);

        if presented != Some(secret.as_str()) {
            tracing::debug!("Admin authentication failed");
            set_header(res, "WWW-Authenticate", "Bearer");
            write_text(res, StatusCode::UNAUTHORIZED, "Unauthorized");
            ctrl.skip_rest();
        }
    }
}

/// ## Summary
/// Middleware handler for the token administration API.
pub struct AdminAuthMiddleware;
