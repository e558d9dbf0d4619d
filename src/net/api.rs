//! HTTP-backed authentication client.
//!
//! Client-side (hydrate): real `POST` via `gloo-net`.
//! Server-side (SSR) and native builds: returns a transport error, since the
//! endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an `AuthError` so the login page can render it as a
//! message instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::auth::{AuthClient, AuthError};
use super::types::UserRecord;

/// Posts credentials as JSON to a credential-check endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthClient {
    endpoint: String,
}

impl HttpAuthClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Map a response status onto the login contract.
///
/// # Errors
///
/// `InvalidCredentials` for 401/403, `Transport` for any other non-2xx code.
pub fn check_status(status: u16) -> Result<(), AuthError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(AuthError::InvalidCredentials),
        other => Err(AuthError::Transport(format!("login request failed: {other}"))),
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<UserRecord, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let body = super::types::Credentials {
                username: identifier.to_owned(),
                password: secret.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&body)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<UserRecord>()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identifier, secret);
            Err(AuthError::Transport("not available on server".to_owned()))
        }
    }
}
