//! Periodic client tasks with explicit cancellation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components that refresh on a timer (notification bell, directory
//! carousel) spawn a loop with `spawn_poll` and release it from
//! `on_cleanup`. `on_cleanup` requires `Send + Sync`, so the handle keeps its
//! liveness flag in an `Arc<AtomicBool>`.
//!
//! Cancelling wakes the loop immediately, which drops the pending timer
//! instead of leaving it to fire into a dead component.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{Either, select};

/// Cancellation handle shared between a periodic task and its owner.
#[derive(Clone, Debug, Default)]
pub struct PollHandle {
    inner: Arc<PollInner>,
}

#[derive(Debug, Default)]
struct PollInner {
    cancelled: AtomicBool,
    stop: Mutex<Option<oneshot::Sender<()>>>,
}

impl PollHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle plus the receiver that resolves once it is cancelled.
    #[must_use]
    pub fn with_stop_signal() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        let handle = Self {
            inner: Arc::new(PollInner { cancelled: AtomicBool::new(false), stop: Mutex::new(Some(tx)) }),
        };
        (handle, rx)
    }

    /// Stop the task. Safe to call more than once.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Relaxed);
        if let Ok(mut stop) = self.inner.stop.lock() {
            // Dropping the sender resolves the loop's stop receiver.
            stop.take();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Relaxed)
    }
}

/// Drive `tick` every `interval` until `handle` is cancelled.
///
/// `sleep` supplies the timer. With `immediate` set the first tick runs
/// right away instead of after one interval. The next interval starts only
/// after a tick completes, so ticks never overlap. Cancelling resolves
/// `stop`, which abandons a pending sleep at once.
pub async fn run_poll<S, SFut, F, Fut>(
    handle: PollHandle,
    mut stop: oneshot::Receiver<()>,
    interval: Duration,
    immediate: bool,
    mut sleep: S,
    mut tick: F,
) where
    S: FnMut(Duration) -> SFut,
    SFut: Future<Output = ()>,
    F: FnMut(PollHandle) -> Fut,
    Fut: Future<Output = ()>,
{
    if immediate && !handle.is_cancelled() {
        tick(handle.clone()).await;
    }
    loop {
        if handle.is_cancelled() {
            break;
        }
        if let Either::Right(_) = select(Box::pin(sleep(interval)), &mut stop).await {
            break;
        }
        if handle.is_cancelled() {
            break;
        }
        tick(handle.clone()).await;
    }
}

/// Spawn `tick` every `interval` on the local executor, timed by
/// `gloo-timers`.
#[cfg(feature = "hydrate")]
pub fn spawn_poll<F, Fut>(interval: Duration, immediate: bool, tick: F) -> PollHandle
where
    F: FnMut(PollHandle) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let (handle, stop) = PollHandle::with_stop_signal();
    leptos::task::spawn_local(run_poll(
        handle.clone(),
        stop,
        interval,
        immediate,
        gloo_timers::future::sleep,
        tick,
    ));
    handle
}
