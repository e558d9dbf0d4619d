//! Auth backend configuration.
//!
//! Selects which `AuthClient` the app provides and tunes the simulated
//! latency of the mock. Defaults reproduce the stand-in behavior: mock
//! backend, one second of latency.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the `<meta>` tag the host page may use to ship a JSON config.
pub const META_NAME: &str = "login-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid login config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which authentication collaborator backs the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AuthBackend {
    /// In-process stand-in that resolves after a fixed delay.
    #[default]
    Mock,
    /// JSON `POST` to a credential-check endpoint.
    Http { endpoint: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub backend: AuthBackend,

    /// Simulated network latency for the mock backend, in milliseconds.
    pub mock_latency_ms: u64,
}

impl AuthConfig {
    pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1000;

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if `raw` is not valid config JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    /// Read the config from `<meta name="login-config">`, falling back to
    /// defaults when the tag is absent or malformed.
    #[must_use]
    pub fn load() -> Self {
        let Some(raw) = read_meta_content() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                leptos::logging::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend: AuthBackend::Mock,
            mock_latency_ms: Self::DEFAULT_MOCK_LATENCY_MS,
        }
    }
}

fn read_meta_content() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{META_NAME}\"]");
        let el = doc.query_selector(&selector).ok().flatten()?;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
