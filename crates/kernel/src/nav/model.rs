//! Navigation menu data model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single navigation menu entry.
///
/// Entries are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label, unique within a menu.
    pub name: String,
    /// Route path; must start with "/".
    pub url: String,
    /// Identifier resolved by the UI icon registry.
    pub icon: String,
}

impl NavEntry {
    /// Create a new entry.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }
}

/// An ordered navigation menu.
///
/// Order is significant: it is the menu rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Main menu entries, in render order.
    ///
    /// Serialized as `navMain`, the field name fixed by the shared
    /// navigation contract.
    #[serde(rename = "navMain")]
    pub nav_main: Vec<NavEntry>,
}

impl NavConfig {
    /// Create a menu from entries.
    pub fn new(nav_main: Vec<NavEntry>) -> Self {
        Self { nav_main }
    }

    /// Check the shared-contract invariants: every url starts with `/` and
    /// no two entries share a url.
    ///
    /// Providers call this on the menus they construct. Extension functions
    /// do not: a transform may knowingly produce duplicates.
    pub fn validate(&self) -> Result<(), NavConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.nav_main {
            if !entry.url.starts_with('/') {
                return Err(NavConfigError::RelativeUrl(entry.url.clone()));
            }
            if !seen.insert(entry.url.as_str()) {
                return Err(NavConfigError::DuplicateUrl(entry.url.clone()));
            }
        }
        Ok(())
    }
}

/// Navigation contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavConfigError {
    #[error("navigation url must start with '/': {0}")]
    RelativeUrl(String),

    #[error("duplicate navigation url: {0}")]
    DuplicateUrl(String),
}
