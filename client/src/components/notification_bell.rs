//! Header bell showing the unread notification count.

use leptos::prelude::*;

use crate::state::notifications::NotificationState;

/// Bell button with an unread badge.
///
/// Polls the injected `ApiClient` on mount and every configured interval.
/// Clicking runs `on_click` and leaves the count alone; read-state changes
/// show up on the next poll. The button is disabled while a fetch is
/// outstanding.
#[component]
pub fn NotificationBell(
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let state = RwSignal::new(NotificationState::default());

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        let api = expect_context::<crate::net::api::ApiClient>();
        let poller =
            crate::net::notification_poller::spawn_notification_poller(state, api, config.notification_poll_interval);
        on_cleanup(move || poller.cancel());
    }

    let class_name = if class.is_empty() { "notification-bell".to_owned() } else { format!("notification-bell {class}") };
    let on_press = move |_| {
        if state.get_untracked().in_flight {
            return;
        }
        on_click.run(());
    };

    view! {
        <button
            class=class_name
            type="button"
            aria-label="Notifications"
            disabled=move || state.get().in_flight
            on:click=on_press
        >
            <svg class="notification-bell__icon" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"></path>
                <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"></path>
            </svg>
            {move || {
                state
                    .get()
                    .badge_label()
                    .map(|label| view! { <span class="notification-bell__badge">{label}</span> })
            }}
        </button>
    }
}
