use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// How the gateway is exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerMode {
    /// Own listener, routes at the root.
    Standalone,
    /// Routes nested under `server.base_path` next to a host application.
    Mounted,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Externally visible origin, when it differs from the bind address.
    pub public_origin: Option<String>,
    pub mode: ServerMode,
    #[serde(default)]
    pub base_path: String,
}

impl ServerConfig {
    /// Origin logged at start-up: `public_origin` or the plain-HTTP bind address.
    #[must_use]
    pub fn origin(&self) -> String {
        self.public_origin
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }

    /// ## Summary
    /// Returns the route prefix every gateway path is nested under.
    ///
    /// Standalone deployments always use the empty prefix. Mounted deployments use
    /// `base_path` normalized to a single leading slash and no trailing slash.
    #[must_use]
    pub fn route_base(&self) -> String {
        match self.mode {
            ServerMode::Standalone => String::new(),
            ServerMode::Mounted => normalize_base_path(&self.base_path),
        }
    }
}

/// ## Summary
/// Normalizes a mount prefix to `/segment[/segment...]`, or the empty string.
#[must_use]
pub fn normalize_base_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        String::new()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Realm announced in `WWW-Authenticate` challenges.
    pub realm: String,
    /// Bearer secret guarding the token administration API. The API is not mounted
    /// when unset.
    pub admin_secret: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Optional calendar overrides; unset fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub timezone: Option<String>,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub slug: Option<String>,
    pub max_events: Option<usize>,
    pub refresh_interval_minutes: Option<u32>,
    pub appointment_label: Option<String>,
    pub busy_label: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// JSON document loaded into the in-memory store at start-up.
    pub seed_path: Option<String>,
}

impl Settings {
    /// ## Summary
    /// Layers built-in defaults, `SLOTDAV_*` environment variables and an optional
    /// `config.toml`, in that order.
    ///
    /// Nested keys are joined with `__`, e.g. `SLOTDAV_SERVER__BASE_PATH`.
    ///
    /// ## Errors
    /// Fails when a source cannot be read or the merged tree does not match [`Settings`].
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("server.mode", "standalone")?
            .set_default("server.base_path", "")?
            .set_default("auth.realm", "slotdav")?
            .set_default("logging.level", "info")?
            .add_source(
                config::Environment::with_prefix("SLOTDAV")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Exports a `.env` file from the working directory, if present, then calls
/// [`Settings::load`].
///
/// ## Errors
/// See [`Settings::load`].
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
