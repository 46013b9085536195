//! Login page: identifier + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards send signed-out users here with the path they tried to open as
//! navigation state. After a successful sign-in the auth state is reloaded
//! and the user continues to that path, or to their role's landing view.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::location::Location;

use crate::config::{LOGIN_PATH, landing_path};
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{Credentials, Role};
use crate::state::auth::{AuthAccessor, AuthState, load_auth_state};

const MISSING_FIELDS: &str = "Enter both your email and password.";

/// Trim and require both credential fields.
pub(crate) fn validate_credentials(identifier: &str, password: &str) -> Result<Credentials, &'static str> {
    let identifier = identifier.trim();
    let password = password.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { identifier: identifier.to_owned(), password: password.to_owned() })
}

/// Where to go after signing in.
pub(crate) fn post_login_target(from: Option<&str>, role: Option<Role>) -> String {
    match from {
        Some(path) if path.starts_with('/') && path != LOGIN_PATH => path.to_owned(),
        _ => role.map_or("/", landing_path).to_owned(),
    }
}

/// Path handed over by a guard redirect, if any.
fn navigation_origin(location: &Location) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        location.state.get_untracked().to_js_value().as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = location;
        None
    }
}

fn sign_in_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Invalid email or password.".to_owned(),
        other => format!("Sign in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthAccessor>();
    let writer = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();
    let from = StoredValue::new(navigation_origin(&use_location()));
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_signed_in() && !busy.get_untracked() {
            let target = post_login_target(from.get_value().as_deref(), state.role());
            navigate_signed_in(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&identifier.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        let from = from.get_value();
        leptos::task::spawn_local(async move {
            match api.sign_in(&credentials).await {
                Ok(()) => {
                    let state = load_auth_state(&api).await;
                    let target = post_login_target(from.as_deref(), state.role());
                    leptos::logging::log!("signed in; continuing to {target}");
                    writer.set(state);
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("sign in failed: {e}");
                    info.set(sign_in_error_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MedSupply"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Email"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
