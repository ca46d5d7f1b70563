//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::nav::{self, NavConfig};
use crate::registry::{self, RegistryClient};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Process configuration, immutable after startup.
    config: Config,

    /// Navigation menu with the enterprise extension applied.
    nav: Arc<NavConfig>,

    /// Registry API client.
    registry: Arc<RegistryClient>,
}

impl AppState {
    /// Create new application state from configuration and the base menu.
    ///
    /// The enterprise extension is applied here, once; handlers only ever
    /// see the extended menu. The base menu must satisfy the navigation
    /// contract.
    pub fn new(config: Config, base_nav: NavConfig) -> Result<Self> {
        base_nav
            .validate()
            .context("base navigation violates the menu contract")?;

        let nav = Arc::new(nav::extend_navigation(&base_nav));

        let registry = Arc::new(
            RegistryClient::new(registry::registry_url(&config.app_url))
                .context("failed to create registry client")?,
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                nav,
                registry,
            }),
        })
    }

    /// Get the process configuration.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the extended navigation menu.
    pub fn nav(&self) -> &Arc<NavConfig> {
        &self.inner.nav
    }

    /// Get the registry client.
    pub fn registry(&self) -> &Arc<RegistryClient> {
        &self.inner.registry
    }
}
