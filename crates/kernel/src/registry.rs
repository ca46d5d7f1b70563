//! Plugin registry API client.
//!
//! One client instance is constructed at startup and owned by the
//! application state; consumers receive a handle rather than importing a
//! process-wide global.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fixed path suffix identifying the registry API namespace.
const API_SUFFIX: &str = "/api";

/// Derive the registry base URL from the public application URL.
pub fn registry_url(app_url: &str) -> String {
    format!("{app_url}{API_SUFFIX}")
}

/// Summary of a registry plugin returned by search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSummary {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
}

/// Full plugin record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDetail {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub downloads: u64,
}

/// Client for the remote plugin registry API.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
    client: reqwest::Client,
}

impl RegistryClient {
    /// Create a client for the registry at `registry_url`.
    pub fn new(registry_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            // Disable redirect following to prevent SSRF bypass via 302 to internal IPs
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("failed to build registry HTTP client")?;

        Ok(Self {
            base_url: registry_url.into(),
            client,
        })
    }

    /// The registry base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the registry for plugins matching `query`.
    pub async fn search(&self, query: &str) -> Result<Vec<PluginSummary>, reqwest::Error> {
        self.client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch a single plugin record by name.
    ///
    /// Returns `None` when the registry does not know the plugin.
    pub async fn plugin(&self, name: &str) -> Result<Option<PluginDetail>, reqwest::Error> {
        let response = self
            .client
            .get(format!("{}/plugins/{name}", self.base_url))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let detail = response.error_for_status()?.json().await?;
        Ok(Some(detail))
    }
}
