//! Shared chrome for role dashboards: header, bell, sign-out, notices.

use leptos::prelude::*;

use crate::components::auth_guard::PendingActivation;
use crate::components::notification_bell::NotificationBell;
use crate::components::notification_panel::NotificationPanel;
use crate::components::registration_notice::RegistrationNotice;
use crate::net::api::ApiClient;
use crate::state::auth::{AuthAccessor, AuthState};

/// Dashboard frame. Must be rendered inside an `AuthGuard` to pick up the
/// pending-activation flag.
#[component]
pub fn DashboardShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = expect_context::<AuthAccessor>();
    let writer = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();
    let pending = use_context::<PendingActivation>();
    let show_panel = RwSignal::new(false);

    let on_bell = Callback::new(move |()| show_panel.update(|open| *open = !*open));
    let on_close = Callback::new(move |()| show_panel.set(false));

    let display_name = move || {
        auth.get()
            .profile
            .and_then(|p| p.display_name().map(str::to_owned))
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api.sign_out().await {
                leptos::logging::warn!("sign out failed: {e}");
            }
            writer.set(AuthState::resolved(None, None));
        });
    };

    let notice = move || {
        let is_pending = pending.is_some_and(|p| p.0.get());
        match (is_pending, auth.get().role()) {
            (true, Some(role)) => Some(view! { <RegistrationNotice role=role/> }),
            _ => None,
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__title">{title}</h1>
                <span class="dashboard__spacer"></span>
                <span class="dashboard__user">{display_name}</span>
                <div class="dashboard__bell">
                    <NotificationBell on_click=on_bell/>
                    <Show when=move || show_panel.get()>
                        <NotificationPanel on_close=on_close/>
                    </Show>
                </div>
                <button class="btn dashboard__sign-out" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            {notice}
            <main class="dashboard__content">{children()}</main>
        </div>
    }
}
