//! Records exchanged with the authentication collaborator.
//!
//! DESIGN
//! ======
//! `UserRecord` doubles as the JSON response body of the HTTP client, so its
//! serde shape is the contract a real identity endpoint must return.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username that maps to the `Admin` role, compared case-insensitively.
pub const ADMIN_USERNAME: &str = "admin";

/// Access level of a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Moderator,
}

impl Role {
    /// Derive the role for `username`: `Admin` iff it lowercases to `"admin"`.
    #[must_use]
    pub fn for_username(username: &str) -> Self {
        if username.to_lowercase() == ADMIN_USERNAME {
            Self::Admin
        } else {
            Self::Moderator
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Moderator => "Moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity returned on a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque identifier assigned by the collaborator.
    pub id: String,
    /// Username exactly as submitted.
    pub username: String,
    pub role: Role,
}

/// Username/password pair captured at submit time.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}
