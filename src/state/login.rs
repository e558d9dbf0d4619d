//! Login screen state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page holds one `LoginState` in an `RwSignal`. Input events and
//! submission outcomes go through the transition methods below; nothing else
//! mutates the form.
//!
//! DESIGN
//! ======
//! `LoginView` is either the editable form or the signed-in record, so an
//! error or a pending submission can never coexist with an authenticated
//! user. Each submit is issued a `SubmissionId`; a completion is applied only
//! if it matches the pending id, which drops results that land after logout.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::AuthError;
use crate::net::types::{Credentials, UserRecord};

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Ticket correlating a pending auth call with its completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// A validated submit, handed to the auth client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub credentials: Credentials,
}

/// Editable fields and view-control flags of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    /// Collected but not consumed by any auth client.
    pub remember_me: bool,
    pub password_visible: bool,
    pub last_error: Option<String>,
    pending: Option<SubmissionId>,
}

impl FormState {
    /// Both fields are non-empty after trimming.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }

    #[must_use]
    pub fn submission_in_flight(&self) -> bool {
        self.pending.is_some()
    }
}

/// What the login page is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginView {
    Editing(FormState),
    Authenticated(UserRecord),
}

impl Default for LoginView {
    fn default() -> Self {
        Self::Editing(FormState::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    view: LoginView,
    next_id: u64,
}

impl LoginState {
    #[must_use]
    pub fn view(&self) -> &LoginView {
        &self.view
    }

    /// The form, when not signed in.
    #[must_use]
    pub fn form(&self) -> Option<&FormState> {
        match &self.view {
            LoginView::Editing(form) => Some(form),
            LoginView::Authenticated(_) => None,
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserRecord> {
        match &self.view {
            LoginView::Authenticated(user) => Some(user),
            LoginView::Editing(_) => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form()
            .is_some_and(|form| form.is_valid() && !form.submission_in_flight())
    }

    fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.view {
            LoginView::Editing(form) => Some(form),
            LoginView::Authenticated(_) => None,
        }
    }

    pub fn set_username(&mut self, value: String) {
        if let Some(form) = self.form_mut() {
            form.username = value;
        }
    }

    pub fn set_password(&mut self, value: String) {
        if let Some(form) = self.form_mut() {
            form.password = value;
        }
    }

    pub fn set_remember_me(&mut self, value: bool) {
        if let Some(form) = self.form_mut() {
            form.remember_me = value;
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        if let Some(form) = self.form_mut() {
            form.password_visible = !form.password_visible;
        }
    }

    /// Start a submission if the form is valid and idle.
    ///
    /// Returns `None` (and changes nothing) otherwise. The credentials are
    /// taken verbatim; trimming only applies to the validity check.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        let id = SubmissionId(self.next_id);
        self.next_id += 1;

        let form = self.form_mut()?;
        form.pending = Some(id);
        form.last_error = None;
        Some(Submission {
            id,
            credentials: Credentials {
                username: form.username.clone(),
                password: form.password.clone(),
            },
        })
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Returns `false` when `id` is not the pending submission, in which case
    /// the state is left untouched.
    pub fn complete_submit(&mut self, id: SubmissionId, result: Result<UserRecord, AuthError>) -> bool {
        let Some(form) = self.form_mut() else {
            return false;
        };
        if form.pending != Some(id) {
            return false;
        }
        form.pending = None;

        match result {
            Ok(user) => self.view = LoginView::Authenticated(user),
            Err(e) => form.last_error = Some(failure_message(&e)),
        }
        true
    }

    /// Sign out: drop the user and reset the form. No-op while editing.
    pub fn logout(&mut self) {
        if self.is_authenticated() {
            self.view = LoginView::default();
        }
    }
}

/// Text rendered for a failed attempt.
#[must_use]
pub fn failure_message(err: &AuthError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_owned()
    } else {
        message
    }
}
