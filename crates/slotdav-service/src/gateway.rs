use std::sync::Arc;

use slotdav_core::types::CalendarMetadata;
use slotdav_rfc::rfc::ical::{EventCodec, LenientCodec};
use slotdav_store::SchedulingStore;

use crate::settings::{SettingsProvider, resolve_metadata};

/// ## Summary
/// Collaborators shared by every request: the scheduling store, the settings
/// provider and the iCalendar codec.
///
/// Built once at router construction and shared read-only.
#[derive(Clone)]
pub struct Gateway {
    pub store: Arc<dyn SchedulingStore>,
    pub settings: Arc<dyn SettingsProvider>,
    pub codec: Arc<dyn EventCodec>,
}

impl Gateway {
    /// Creates a gateway using the lenient iCalendar codec.
    #[must_use]
    pub fn new(store: Arc<dyn SchedulingStore>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self {
            store,
            settings,
            codec: Arc::new(LenientCodec),
        }
    }

    /// Replaces the iCalendar codec.
    #[must_use]
    pub fn with_codec(mut self, codec: Arc<dyn EventCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Resolves the calendar settings for the current request.
    pub async fn metadata(&self) -> CalendarMetadata {
        resolve_metadata(self.settings.as_ref()).await
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}
