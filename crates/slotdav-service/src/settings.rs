//! Calendar settings resolution.

use std::future::Future;
use std::pin::Pin;

use slotdav_core::config::CalendarConfig;
use slotdav_core::types::CalendarMetadata;
use slotdav_core::util::slug::generate_slug;

use crate::error::ServiceResult;

pub type SettingsFuture<'a> =
    Pin<Box<dyn Future<Output = ServiceResult<CalendarConfig>> + Send + 'a>>;

/// ## Summary
/// Source of calendar display settings.
///
/// Every field is an optional override of the built-in defaults.
pub trait SettingsProvider: Send + Sync {
    fn calendar_overrides(&self) -> SettingsFuture<'_>;
}

/// A [`SettingsProvider`] serving the `calendar` section of the configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigSettingsProvider {
    overrides: CalendarConfig,
}

impl ConfigSettingsProvider {
    #[must_use]
    pub const fn new(overrides: CalendarConfig) -> Self {
        Self { overrides }
    }
}

impl SettingsProvider for ConfigSettingsProvider {
    fn calendar_overrides(&self) -> SettingsFuture<'_> {
        Box::pin(async move { Ok(self.overrides.clone()) })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// ## Summary
/// Merges provider overrides over the defaults, field by field.
///
/// A failing provider, an unknown timezone or an unusable slug fall back to the
/// defaults and are logged at `warn`.
#[tracing::instrument(skip_all)]
pub async fn resolve_metadata(provider: &dyn SettingsProvider) -> CalendarMetadata {
    let overrides = match provider.calendar_overrides().await {
        Ok(overrides) => overrides,
        Err(e) => {
            tracing::warn!(error = %e, "Settings provider failed, using defaults");
            CalendarConfig::default()
        }
    };
    apply_overrides(CalendarMetadata::default(), overrides)
}

fn apply_overrides(mut meta: CalendarMetadata, overrides: CalendarConfig) -> CalendarMetadata {
    if let Some(name) = non_empty(overrides.name) {
        meta.name = name;
    }
    if let Some(description) = non_empty(overrides.description) {
        meta.description = description;
    }
    if let Some(timezone) = non_empty(overrides.timezone) {
        if timezone.parse::<chrono_tz::Tz>().is_ok() {
            meta.timezone = timezone;
        } else {
            tracing::warn!(%timezone, "Unknown timezone, using default");
        }
    }
    if let Some(slug) = non_empty(overrides.slug) {
        match generate_slug(&slug) {
            Some(normalized) => meta.slug = normalized,
            None => tracing::warn!(%slug, "Unusable calendar slug, using default"),
        }
    }
    if let Some(max_events) = overrides.max_events.filter(|n| *n > 0) {
        meta.max_events = max_events;
    }
    if let Some(minutes) = overrides.refresh_interval_minutes {
        meta.refresh_interval_minutes = minutes;
    }
    if let Some(label) = non_empty(overrides.appointment_label) {
        meta.appointment_label = label;
    }
    if let Some(label) = non_empty(overrides.busy_label) {
        meta.busy_label = label;
    }
    if let Some(currency) = non_empty(overrides.currency) {
        meta.currency = currency;
    }
    meta.contact = non_empty(overrides.contact);
    meta.location = non_empty(overrides.location);
    meta
}
