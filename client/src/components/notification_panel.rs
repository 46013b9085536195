//! Drop-down list of the user's notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the bell's click callback. Marking a row read goes straight to
//! the notification collaborator; the bell badge catches up on its next poll.

use leptos::prelude::*;

use crate::net::api::{ApiClient, NotificationSource};
use crate::net::types::Notification;

#[component]
pub fn NotificationPanel(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let list = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.fetch_notifications().await }
        }
    });

    let on_mark_read = Callback::new(move |id: String| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.mark_notification_read(&id).await {
                Ok(()) => list.refetch(),
                Err(e) => leptos::logging::error!("failed to mark notification {id} as read: {e}"),
            }
        });
    });

    view! {
        <div class="notification-panel">
            <header class="notification-panel__header">
                <h2>"Notifications"</h2>
                <button class="btn" type="button" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </header>
            <Suspense fallback=move || view! { <p class="notification-panel__loading">"Loading..."</p> }>
                {move || {
                    list.get()
                        .map(|result| match result {
                            Ok(items) if items.is_empty() => {
                                view! { <p class="notification-panel__empty">"No notifications."</p> }.into_any()
                            }
                            Ok(items) => {
                                view! {
                                    <ul class="notification-panel__list">
                                        {items
                                            .into_iter()
                                            .map(|n| notification_row(n, on_mark_read))
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                leptos::logging::warn!("notification list unavailable: {e}");
                                view! {
                                    <p class="notification-panel__error">"Notifications are unavailable right now."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn notification_row(notification: Notification, on_mark_read: Callback<String>) -> impl IntoView {
    let unread = notification.is_unread();
    let id = notification.id.clone();
    view! {
        <li class="notification-panel__item" class:notification-panel__item--unread=unread>
            <div class="notification-panel__text">
                <strong>{notification.title}</strong>
                <p>{notification.message}</p>
                {notification.created_at.map(|ts| view! { <time class="notification-panel__time">{ts}</time> })}
            </div>
            <Show when=move || unread>
                <button
                    class="btn notification-panel__mark-read"
                    type="button"
                    on:click={
                        let id = id.clone();
                        move |_| on_mark_read.run(id.clone())
                    }
                >
                    "Mark as read"
                </button>
            </Show>
        </li>
    }
}
