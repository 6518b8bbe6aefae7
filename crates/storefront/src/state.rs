//! Application state shared across handlers.

use std::sync::Arc;

use mmbm_core::{Catalog, WhatsAppChannel};

use crate::config::StorefrontConfig;
use crate::services::{BackgroundRemovalClient, BackgroundRemovalError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, configuration, and the order hand-off channel. The cart itself
/// is not here: it is per-session state, stored in the session layer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    channel: WhatsAppChannel,
    background_removal: Option<BackgroundRemovalClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - The seeded product catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the background-removal HTTP client fails to
    /// build (only attempted when an endpoint is configured).
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Result<Self, BackgroundRemovalError> {
        let channel = WhatsAppChannel::new(&config.whatsapp_number);
        let background_removal = config
            .background_removal_url
            .as_deref()
            .map(BackgroundRemovalClient::new)
            .transpose()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                channel,
                background_removal,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the WhatsApp hand-off channel.
    #[must_use]
    pub fn channel(&self) -> &WhatsAppChannel {
        &self.inner.channel
    }

    /// Get the background-removal client, when one is configured.
    #[must_use]
    pub fn background_removal(&self) -> Option<&BackgroundRemovalClient> {
        self.inner.background_removal.as_ref()
    }
}
