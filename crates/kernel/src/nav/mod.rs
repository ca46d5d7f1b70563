//! Navigation menu model and extensions.
//!
//! The menu shape is a shared contract: any provider building a base menu
//! and any consumer rendering one must agree on [`NavConfig`]. Transforms
//! such as the enterprise extension produce new values; no menu is ever
//! mutated in place.

mod enterprise;
mod model;

pub use enterprise::extend_navigation;
pub use model::{NavConfig, NavConfigError, NavEntry};

/// Base navigation menu provided by the kernel.
///
/// Editions and plugins extend this; they never edit it.
pub fn base_navigation() -> NavConfig {
    NavConfig::new(vec![
        NavEntry::new("Home", "/", "home"),
        NavEntry::new("Plugins", "/plugins", "package"),
        NavEntry::new("Search", "/search", "search"),
        NavEntry::new("Settings", "/settings", "settings"),
    ])
}
