//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config::AuthConfig;
use crate::net::auth::AppAuthClient;
use crate::pages::login::LoginPage;
use crate::state::login::LoginState;

/// Root application component.
///
/// Provides the login state and the configured auth client to the page.
#[component]
pub fn App(#[prop(optional)] config: Option<AuthConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let state = RwSignal::new(LoginState::default());

    provide_context(state);
    provide_context(AppAuthClient::from_config(&config));

    view! {
        <Stylesheet id="leptos" href="/pkg/login-screen.css"/>
        <Title text="Log In"/>

        <LoginPage/>
    }
}
