//! Authentication collaborators and the records they exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the `AuthClient` contract and the in-process mock, `api`
//! holds the HTTP-backed client, and `types` defines the shared records.

pub mod api;
pub mod auth;
pub mod types;
