//! Periodic unread-count refresh for the notification bell.
//!
//! The poller fetches once on spawn and then every configured interval.
//! Results that arrive after the owning component was torn down are dropped,
//! and a failed fetch is only logged; the next scheduled tick is the retry.

#[cfg(test)]
#[path = "notification_poller_test.rs"]
mod notification_poller_test;

use super::api::{ApiError, NotificationSource};
use super::types::Notification;
use crate::state::notifications::NotificationState;
use crate::util::poll::PollHandle;
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

/// Fetch from `source`, discarding the result if `handle` was cancelled
/// while the request was in flight.
pub async fn fetch_unless_cancelled<S: NotificationSource>(
    source: &S,
    handle: &PollHandle,
) -> Option<Result<Vec<Notification>, ApiError>> {
    if handle.is_cancelled() {
        return None;
    }
    let result = source.fetch_notifications().await;
    if handle.is_cancelled() { None } else { Some(result) }
}

/// Spawn the polling loop for one bell instance.
#[cfg(feature = "hydrate")]
pub fn spawn_notification_poller<S>(
    state: RwSignal<NotificationState>,
    source: S,
    interval: std::time::Duration,
) -> PollHandle
where
    S: NotificationSource + Clone + 'static,
{
    crate::util::poll::spawn_poll(interval, true, move |handle| {
        let source = source.clone();
        async move {
            poll_once(&source, &handle, |apply: &mut dyn FnMut(&mut NotificationState)| {
                state.try_update(|s| apply(s)).is_some()
            })
            .await;
        }
    })
}

/// One poll tick: mark the fetch started, fetch, apply the result.
///
/// `update` applies a change to the bell state and returns `false` once
/// that state is gone. The tick is skipped when a fetch is already in
/// flight or the state was disposed.
pub async fn poll_once<S, U>(source: &S, handle: &PollHandle, mut update: U)
where
    S: NotificationSource,
    U: FnMut(&mut dyn FnMut(&mut NotificationState)) -> bool,
{
    let mut started = false;
    let alive = update(&mut |s: &mut NotificationState| started = s.begin_fetch());
    if !alive || !started {
        return;
    }
    let Some(result) = fetch_unless_cancelled(source, handle).await else {
        return;
    };
    if let Err(e) = &result {
        leptos::logging::error!("failed to fetch notifications: {e}");
    }
    let mut result = Some(result);
    update(&mut |s: &mut NotificationState| {
        if let Some(result) = result.take() {
            s.finish_fetch(result);
        }
    });
}
