//! Authentication client contract and the in-process mock.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page only depends on `AuthClient`. `MockAuthClient` stands in
//! for a real identity provider; `HttpAuthClient` (see `api`) is the network
//! replacement with the same contract: asynchronous, may fail with a
//! credentials error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::time::Duration;

use crate::config::{AuthBackend, AuthConfig};
use crate::net::api::HttpAuthClient;
use crate::net::types::{Role, UserRecord};
use crate::util::delay;

/// Password that makes the mock reject the attempt.
pub const FAILURE_SENTINEL: &str = "fail";

/// Identifier the mock assigns to every user it signs in.
pub const PLACEHOLDER_USER_ID: &str = "1";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Transport(String),
}

/// Verifies credentials and returns the signed-in user.
pub trait AuthClient {
    /// Attempt to sign in `identifier` with `secret`.
    fn login(&self, identifier: &str, secret: &str) -> impl Future<Output = Result<UserRecord, AuthError>>;
}

/// Stand-in client: waits a fixed latency, then accepts every secret except
/// [`FAILURE_SENTINEL`].
#[derive(Clone, Debug)]
pub struct MockAuthClient {
    latency: Duration,
}

impl MockAuthClient {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockAuthClient {
    fn default() -> Self {
        Self::new(Duration::from_millis(AuthConfig::DEFAULT_MOCK_LATENCY_MS))
    }
}

impl AuthClient for MockAuthClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<UserRecord, AuthError> {
        delay::sleep(self.latency).await;

        if secret == FAILURE_SENTINEL {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(UserRecord {
            id: PLACEHOLDER_USER_ID.to_owned(),
            username: identifier.to_owned(),
            role: Role::for_username(identifier),
        })
    }
}

/// The client the app provides via context, chosen by `AuthConfig`.
#[derive(Clone, Debug)]
pub enum AppAuthClient {
    Mock(MockAuthClient),
    Http(HttpAuthClient),
}

impl AppAuthClient {
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        match &config.backend {
            AuthBackend::Mock => Self::Mock(MockAuthClient::new(config.mock_latency())),
            AuthBackend::Http { endpoint } => Self::Http(HttpAuthClient::new(endpoint.clone())),
        }
    }
}

impl AuthClient for AppAuthClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<UserRecord, AuthError> {
        match self {
            Self::Mock(client) => client.login(identifier, secret).await,
            Self::Http(client) => client.login(identifier, secret).await,
        }
    }
}
