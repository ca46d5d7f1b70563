//! Process instrumentation: the one-time console logging override.
//!
//! The hosting environment reports which execution runtime the process is
//! running under. Only the primary server runtime swaps the process logging
//! surface for the tracing subscriber; edge and other runtimes are left
//! untouched.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable reporting the execution runtime.
const RUNTIME_ENV: &str = "APP_RUNTIME";

/// Source label on the override confirmation record.
const SOURCE_LABEL: &str = "Instrumentation";

/// Execution runtime reported by the hosting environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Runtime {
    /// Primary server runtime.
    Server,
    /// Edge runtime.
    Edge,
    /// Any other reported runtime value.
    Other(String),
}

impl Runtime {
    /// Parse the runtime discriminator from its environment value.
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "server" => Runtime::Server,
            "edge" => Runtime::Edge,
            other => Runtime::Other(other.to_string()),
        }
    }

    /// Whether this runtime installs the console override.
    pub fn is_server(&self) -> bool {
        matches!(self, Runtime::Server)
    }
}

/// Read the runtime discriminator from the process environment.
///
/// An absent variable means the primary server runtime.
pub fn runtime_from_env() -> Runtime {
    std::env::var(RUNTIME_ENV)
        .map(|v| Runtime::from_env_value(&v))
        .unwrap_or(Runtime::Server)
}

/// Install the console logging override for the given runtime.
///
/// Under the primary server runtime this installs the tracing subscriber as
/// the process-wide logging surface and emits one confirmation record; under
/// any other runtime it does nothing. Must run once, before any other
/// component logs — a second install attempt fails because a global
/// subscriber is already set, and that failure is fatal at startup.
///
/// Returns whether the override was installed.
pub fn install(runtime: &Runtime) -> Result<bool> {
    if !runtime.is_server() {
        return Ok(false);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("failed to install console logging override")?;

    info!(source = SOURCE_LABEL, "console logging override installed");

    Ok(true)
}
