//! Login page: drives submissions and switches between the form and the
//! signed-in panel.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::authenticated_panel::AuthenticatedPanel;
use crate::components::login_form::LoginForm;
use crate::net::auth::{AppAuthClient, AuthClient, AuthError};
use crate::net::types::UserRecord;
use crate::state::login::{LoginState, Submission, SubmissionId};

/// Await `client.login` for `submission` and return the outcome tagged with
/// the submission id, ready for `LoginState::complete_submit`.
pub async fn run_submission<C: AuthClient>(
    client: &C,
    submission: Submission,
) -> (SubmissionId, Result<UserRecord, AuthError>) {
    let Submission { id, credentials } = submission;
    leptos::logging::log!("login: submitting for {}", credentials.username);

    let result = client.login(&credentials.username, &credentials.password).await;
    match &result {
        Ok(user) => leptos::logging::log!("login: signed in {} as {}", user.username, user.role),
        Err(e) => leptos::logging::warn!("login: rejected for {}: {e}", credentials.username),
    }
    (id, result)
}

/// Feed a finished submission back into `state`. Returns `false` if the
/// result was discarded.
pub fn apply_outcome(
    state: &mut LoginState,
    id: SubmissionId,
    result: Result<UserRecord, AuthError>,
) -> bool {
    let applied = state.complete_submit(id, result);
    if !applied {
        leptos::logging::log!("login: discarding stale result for {id:?}");
    }
    applied
}

/// Login page. Expects `RwSignal<LoginState>` and `AppAuthClient` in context.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<RwSignal<LoginState>>();
    let client = expect_context::<AppAuthClient>();

    let user = Memo::new(move |_| state.with(|s| s.user().cloned()));

    let on_submit = Callback::new(move |()| {
        let Some(submission) = state.try_update(LoginState::begin_submit).flatten() else {
            return;
        };
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let (id, result) = run_submission(&client, submission).await;
            // The signal is gone if the page was torn down mid-request.
            if state.try_update(|s| apply_outcome(s, id, result)).is_none() {
                leptos::logging::log!("login: page disposed, dropping result");
            }
        });
    });

    let on_logout = Callback::new(move |()| {
        leptos::logging::log!("login: signing out");
        state.update(LoginState::logout);
    });

    view! {
        <div class="login-page">
            {move || match user.get() {
                Some(user) => view! { <AuthenticatedPanel user=user on_logout=on_logout/> }.into_any(),
                None => view! { <LoginForm state=state on_submit=on_submit/> }.into_any(),
            }}
        </div>
    }
}
