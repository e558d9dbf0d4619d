//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns orchestration and delegates rendering details to
//! `components`.

pub mod login;
