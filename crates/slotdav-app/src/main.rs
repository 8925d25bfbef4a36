use std::sync::Arc;

use salvo::Listener;
use salvo::conn::TcpListener;
use slotdav_app::transport::router_for;
use slotdav_core::config::load_config;
use slotdav_service::Gateway;
use slotdav_service::settings::ConfigSettingsProvider;
use slotdav_store::InMemoryStore;
use slotdav_store::seed::load_seed_file;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the global subscriber at `debug` until the configured level is known.
fn init_tracing() -> FilterHandle {
    let (filter, handle) = reload::Layer::new(EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
    handle
}

fn apply_log_level(handle: &FilterHandle, level: &str) {
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(error) = handle.reload(filter) {
                tracing::warn!(%error, "Could not switch log level");
            }
        }
        Err(error) => tracing::warn!(%level, %error, "Unparseable log level, staying at debug"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_filter = init_tracing();
    tracing::info!("Starting slotdav calendar gateway");

    let config = load_config()?;
    apply_log_level(&log_filter, &config.logging.level);
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        mode = ?config.server.mode,
        base = %config.server.route_base(),
        origin = %config.server.origin(),
        admin_api = config.auth.admin_secret.is_some(),
        "Configuration loaded"
    );

    let store = Arc::new(InMemoryStore::new());
    if let Some(path) = &config.store.seed_path {
        load_seed_file(&store, path).await?;
        tracing::info!(%path, "Seed data loaded");
    }

    let gateway = Arc::new(Gateway::new(
        store,
        Arc::new(ConfigSettingsProvider::new(config.calendar.clone())),
    ));

    let address = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(address.clone()).bind().await;
    tracing::info!(%address, "Listening");

    salvo::Server::new(acceptor)
        .serve(router_for(config, gateway))
        .await;

    Ok(())
}
