//! Signed-in panel shown after a successful login.

#[cfg(test)]
#[path = "authenticated_panel_test.rs"]
mod authenticated_panel_test;

use leptos::prelude::*;

use crate::net::types::{Role, UserRecord};

#[must_use]
pub fn welcome_heading(user: &UserRecord) -> String {
    format!("Welcome, {}!", user.username)
}

#[must_use]
pub fn role_line(role: Role) -> String {
    let article = match role {
        Role::Admin => "an",
        Role::Moderator => "a",
    };
    format!("You are logged in as {article} {role}.")
}

#[component]
pub fn AuthenticatedPanel(user: UserRecord, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="welcome-card">
            <h1 class="welcome-card__title">{welcome_heading(&user)}</h1>
            <p class="welcome-card__role">{role_line(user.role)}</p>
            <button
                class="login-button login-button--secondary"
                type="button"
                on:click=move |_| on_logout.run(())
            >
                "Log Out"
            </button>
        </div>
    }
}
