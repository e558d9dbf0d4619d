//! Presentational components for the login screen.
//!
//! ARCHITECTURE
//! ============
//! Components render one branch of `LoginView` each and report user intent
//! through callbacks; the page owns submission orchestration.

pub mod authenticated_panel;
pub mod login_form;
