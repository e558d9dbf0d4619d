use super::*;
use crate::net::types::Role;

// =============================================================
// Helpers
// =============================================================

fn filled(username: &str, password: &str) -> LoginState {
    let mut state = LoginState::default();
    state.set_username(username.to_owned());
    state.set_password(password.to_owned());
    state
}

fn user(username: &str) -> UserRecord {
    UserRecord {
        id: "1".to_owned(),
        username: username.to_owned(),
        role: Role::for_username(username),
    }
}

fn signed_in(username: &str) -> LoginState {
    let mut state = filled(username, "x");
    let submission = state.begin_submit().unwrap();
    assert!(state.complete_submit(submission.id, Ok(user(username))));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_form() {
    let state = LoginState::default();
    let form = state.form().unwrap();
    assert_eq!(form, &FormState::default());
    assert!(form.username.is_empty());
    assert!(form.password.is_empty());
    assert!(!form.remember_me);
    assert!(!form.password_visible);
    assert!(!form.submission_in_flight());
    assert!(form.last_error.is_none());
    assert!(state.user().is_none());
}

#[test]
fn default_state_cannot_submit() {
    assert!(!LoginState::default().can_submit());
}

// =============================================================
// Field changes
// =============================================================

#[test]
fn field_changes_apply_immediately() {
    let mut state = LoginState::default();
    state.set_username("bob".to_owned());
    state.set_password("pw".to_owned());
    state.set_remember_me(true);
    let form = state.form().unwrap();
    assert_eq!(form.username, "bob");
    assert_eq!(form.password, "pw");
    assert!(form.remember_me);
}

#[test]
fn toggle_password_visibility_flips_flag() {
    let mut state = filled("bob", "pw");
    state.toggle_password_visibility();
    assert!(state.form().unwrap().password_visible);
    state.toggle_password_visibility();
    assert!(!state.form().unwrap().password_visible);
}

#[test]
fn password_visibility_does_not_change_submitted_value() {
    let mut state = filled("bob", "secret");
    state.toggle_password_visibility();
    let submission = state.begin_submit().unwrap();
    assert_eq!(submission.credentials.password, "secret");
}

#[test]
fn field_changes_ignored_when_authenticated() {
    let mut state = signed_in("bob");
    state.set_username("eve".to_owned());
    state.set_password("other".to_owned());
    state.toggle_password_visibility();
    assert_eq!(state.user().unwrap().username, "bob");
    assert!(state.form().is_none());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn can_submit_requires_both_fields() {
    assert!(!filled("", "pw").can_submit());
    assert!(!filled("bob", "").can_submit());
    assert!(filled("bob", "pw").can_submit());
}

#[test]
fn whitespace_only_fields_are_invalid() {
    assert!(!filled("   ", "pw").can_submit());
    assert!(!filled("bob", " \t ").can_submit());
}

#[test]
fn remember_me_does_not_affect_validity() {
    let mut state = filled("bob", "pw");
    state.set_remember_me(true);
    assert!(state.can_submit());
    state.set_remember_me(false);
    assert!(state.can_submit());
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_invalid_is_noop() {
    let mut state = filled(" ", "pw");
    let before = state.clone();
    assert!(state.begin_submit().is_none());
    assert_eq!(state, before);
}

#[test]
fn begin_submit_sets_in_flight_and_clears_error() {
    let mut state = filled("bob", "fail");
    let first = state.begin_submit().unwrap();
    state.complete_submit(first.id, Err(AuthError::InvalidCredentials));
    assert!(state.form().unwrap().last_error.is_some());

    let second = state.begin_submit().unwrap();
    let form = state.form().unwrap();
    assert!(form.submission_in_flight());
    assert!(form.last_error.is_none());
    assert_ne!(first.id, second.id);
}

#[test]
fn begin_submit_passes_fields_verbatim() {
    let mut state = filled(" bob ", " pw ");
    let submission = state.begin_submit().unwrap();
    assert_eq!(submission.credentials.username, " bob ");
    assert_eq!(submission.credentials.password, " pw ");
}

#[test]
fn begin_submit_while_in_flight_is_rejected() {
    let mut state = filled("bob", "pw");
    assert!(state.begin_submit().is_some());
    assert!(!state.can_submit());
    assert!(state.begin_submit().is_none());
}

#[test]
fn begin_submit_when_authenticated_is_rejected() {
    let mut state = signed_in("bob");
    assert!(!state.can_submit());
    assert!(state.begin_submit().is_none());
}

// =============================================================
// complete_submit
// =============================================================

#[test]
fn success_transitions_to_authenticated() {
    let mut state = filled("admin", "x");
    let submission = state.begin_submit().unwrap();
    assert!(state.complete_submit(submission.id, Ok(user("admin"))));
    assert_eq!(state.view(), &LoginView::Authenticated(user("admin")));
    assert!(state.is_authenticated());
    assert_eq!(state.user().unwrap().role, Role::Admin);
}

#[test]
fn failure_stays_editing_with_message() {
    let mut state = filled("bob", "fail");
    let submission = state.begin_submit().unwrap();
    assert!(state.complete_submit(submission.id, Err(AuthError::InvalidCredentials)));
    let form = state.form().unwrap();
    assert!(!form.submission_in_flight());
    assert_eq!(form.last_error.as_deref(), Some("Invalid credentials"));
    assert!(state.user().is_none());
}

#[test]
fn failure_keeps_typed_fields_for_retry() {
    let mut state = filled("bob", "fail");
    let submission = state.begin_submit().unwrap();
    state.complete_submit(submission.id, Err(AuthError::InvalidCredentials));
    let form = state.form().unwrap();
    assert_eq!(form.username, "bob");
    assert_eq!(form.password, "fail");
    assert!(state.can_submit());
}

#[test]
fn failure_without_message_uses_fallback() {
    let mut state = filled("bob", "pw");
    let submission = state.begin_submit().unwrap();
    state.complete_submit(submission.id, Err(AuthError::Transport(String::new())));
    assert_eq!(
        state.form().unwrap().last_error.as_deref(),
        Some(FALLBACK_ERROR_MESSAGE)
    );
}

#[test]
fn transport_failure_message_rendered_verbatim() {
    let mut state = filled("bob", "pw");
    let submission = state.begin_submit().unwrap();
    state.complete_submit(
        submission.id,
        Err(AuthError::Transport("login request failed: 500".to_owned())),
    );
    assert_eq!(
        state.form().unwrap().last_error.as_deref(),
        Some("login request failed: 500")
    );
}

#[test]
fn stale_completion_is_ignored() {
    let mut state = filled("bob", "pw");
    let first = state.begin_submit().unwrap();
    state.complete_submit(first.id, Err(AuthError::InvalidCredentials));
    let _second = state.begin_submit().unwrap();

    let before = state.clone();
    assert!(!state.complete_submit(first.id, Ok(user("bob"))));
    assert_eq!(state, before);
}

#[test]
fn completion_without_pending_submission_is_ignored() {
    let mut state = filled("bob", "pw");
    let submission = state.begin_submit().unwrap();
    assert!(state.complete_submit(submission.id, Err(AuthError::InvalidCredentials)));
    assert!(!state.complete_submit(submission.id, Ok(user("bob"))));
    assert!(state.user().is_none());
}

#[test]
fn completion_after_logout_is_discarded() {
    let mut state = signed_in("bob");
    state.logout();
    assert!(!state.complete_submit(SubmissionId(0), Ok(user("bob"))));
    assert!(state.user().is_none());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_returns_to_empty_editing() {
    let mut state = signed_in("bob");
    state.logout();
    assert_eq!(state.view(), &LoginView::Editing(FormState::default()));
    assert!(state.user().is_none());
}

#[test]
fn logout_while_editing_is_noop() {
    let mut state = filled("bob", "pw");
    state.set_remember_me(true);
    let before = state.clone();
    state.logout();
    assert_eq!(state, before);
}

#[test]
fn logout_clears_remember_me_and_visibility() {
    let mut state = filled("bob", "x");
    state.set_remember_me(true);
    state.toggle_password_visibility();
    let submission = state.begin_submit().unwrap();
    state.complete_submit(submission.id, Ok(user("bob")));
    state.logout();
    let form = state.form().unwrap();
    assert!(!form.remember_me);
    assert!(!form.password_visible);
}

// =============================================================
// failure_message
// =============================================================

#[test]
fn failure_message_uses_error_text() {
    assert_eq!(failure_message(&AuthError::InvalidCredentials), "Invalid credentials");
}

#[test]
fn failure_message_blank_falls_back() {
    assert_eq!(
        failure_message(&AuthError::Transport("   ".to_owned())),
        FALLBACK_ERROR_MESSAGE
    );
}
