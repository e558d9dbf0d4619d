//! Username/password form with visibility toggle and inline error.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::state::login::LoginState;

/// Submit button text; `None` while in flight, when the spinner replaces it.
#[must_use]
pub fn submit_label(in_flight: bool) -> Option<&'static str> {
    if in_flight { None } else { Some("Log In") }
}

/// `type` attribute of the password input.
#[must_use]
pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Accessible label of the show/hide password button.
#[must_use]
pub fn visibility_toggle_label(visible: bool) -> &'static str {
    if visible { "Hide password" } else { "Show password" }
}

/// Login form bound to the shared `LoginState`.
///
/// Field edits go straight into the state; submit is reported through
/// `on_submit` and is disabled unless `LoginState::can_submit` holds.
#[component]
pub fn LoginForm(state: RwSignal<LoginState>, on_submit: Callback<()>) -> impl IntoView {
    let username = move || state.with(|s| s.form().map(|f| f.username.clone()).unwrap_or_default());
    let password = move || state.with(|s| s.form().map(|f| f.password.clone()).unwrap_or_default());
    let remember_me = move || state.with(|s| s.form().is_some_and(|f| f.remember_me));
    let visible = move || state.with(|s| s.form().is_some_and(|f| f.password_visible));
    let in_flight = move || state.with(|s| s.form().is_some_and(|f| f.submission_in_flight()));
    let error = move || state.with(|s| s.form().and_then(|f| f.last_error.clone()));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="login-card">
            <h2 class="login-card__title">"Log In"</h2>
            <form class="login-form" novalidate=true on:submit=on_form_submit>
                <div class="login-field">
                    <input
                        class="login-input"
                        type="text"
                        id="username"
                        placeholder="Username or Email"
                        aria-label="Username or Email"
                        required=true
                        prop:value=username
                        on:input=move |ev| state.update(|s| s.set_username(event_target_value(&ev)))
                    />
                </div>
                <div class="login-field">
                    <input
                        class="login-input login-input--password"
                        type=move || password_input_type(visible())
                        id="password"
                        placeholder="Password"
                        aria-label="Password"
                        required=true
                        prop:value=password
                        on:input=move |ev| state.update(|s| s.set_password(event_target_value(&ev)))
                    />
                    <button
                        class="login-field__toggle"
                        type="button"
                        aria-label=move || visibility_toggle_label(visible())
                        on:click=move |_| state.update(LoginState::toggle_password_visibility)
                    >
                        {move || if visible() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <label class="login-remember">
                    <input
                        type="checkbox"
                        prop:checked=remember_me
                        on:change=move |ev| state.update(|s| s.set_remember_me(event_target_checked(&ev)))
                    />
                    "Remember me"
                </label>
                <button
                    class="login-button"
                    type="submit"
                    disabled=move || !state.with(LoginState::can_submit)
                >
                    <Show when=in_flight fallback=move || submit_label(in_flight())>
                        <span class="login-button__spinner" role="status" aria-label="Logging in"></span>
                    </Show>
                </button>
            </form>
            <Show when=move || error().is_some()>
                <p class="login-message login-message--error" role="alert">
                    {move || error().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
