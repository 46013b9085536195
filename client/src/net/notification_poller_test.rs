use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

struct FakeSource {
    result: Result<Vec<Notification>, ApiError>,
    cancel_during: Option<PollHandle>,
}

impl NotificationSource for FakeSource {
    async fn fetch_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        if let Some(handle) = &self.cancel_during {
            handle.cancel();
        }
        self.result.clone()
    }
}

fn unread(id: &str) -> Notification {
    Notification {
        id: id.to_owned(),
        title: "Payment receipt".to_owned(),
        message: "A receipt is waiting for review".to_owned(),
        kind: Some("payment".to_owned()),
        status: None,
        created_at: None,
        read: Some(false),
    }
}

#[test]
fn live_handle_returns_fetch_result() {
    let source = FakeSource { result: Ok(vec![unread("a"), unread("b")]), cancel_during: None };
    let handle = PollHandle::new();
    let result = block_on(fetch_unless_cancelled(&source, &handle)).expect("live poll yields a result");
    assert_eq!(result.map(|list| list.len()), Ok(2));
}

#[test]
fn cancelled_before_fetch_skips_request() {
    let source = FakeSource { result: Ok(vec![unread("a")]), cancel_during: None };
    let handle = PollHandle::new();
    handle.cancel();
    assert!(block_on(fetch_unless_cancelled(&source, &handle)).is_none());
}

#[test]
fn cancellation_during_fetch_discards_result() {
    let handle = PollHandle::new();
    let source = FakeSource { result: Ok(vec![unread("a")]), cancel_during: Some(handle.clone()) };
    assert!(block_on(fetch_unless_cancelled(&source, &handle)).is_none());
}

// =============================================================
// poll_once
// =============================================================

struct CountingSource {
    inner: FakeSource,
    calls: Cell<usize>,
}

impl CountingSource {
    fn new(result: Result<Vec<Notification>, ApiError>) -> Self {
        Self { inner: FakeSource { result, cancel_during: None }, calls: Cell::new(0) }
    }
}

impl NotificationSource for CountingSource {
    async fn fetch_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch_notifications().await
    }
}

fn read(id: &str) -> Notification {
    Notification { read: Some(true), ..unread(id) }
}

/// Run one tick against a plain state cell.
fn tick(state: &RefCell<NotificationState>, source: &impl NotificationSource, handle: &PollHandle) {
    block_on(poll_once(source, handle, |apply: &mut dyn FnMut(&mut NotificationState)| {
        apply(&mut state.borrow_mut());
        true
    }));
}

#[test]
fn successful_tick_replaces_unread_count() {
    let state = RefCell::new(NotificationState { unread_count: 9, ..NotificationState::default() });
    let source = CountingSource::new(Ok(vec![unread("a"), read("b"), unread("c")]));

    tick(&state, &source, &PollHandle::new());

    let state = state.into_inner();
    assert_eq!(state.unread_count, 2);
    assert!(!state.in_flight);
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn rejected_tick_keeps_count_and_records_error() {
    let state = RefCell::new(NotificationState { unread_count: 5, ..NotificationState::default() });
    let source = CountingSource::new(Err(ApiError::Network("offline".to_owned())));

    tick(&state, &source, &PollHandle::new());

    let state = state.into_inner();
    assert_eq!(state.unread_count, 5);
    assert!(!state.in_flight);
    assert_eq!(state.last_error, Some(ApiError::Network("offline".to_owned())));
}

#[test]
fn tick_is_skipped_while_fetch_in_flight() {
    let state = RefCell::new(NotificationState { in_flight: true, unread_count: 4, ..NotificationState::default() });
    let source = CountingSource::new(Ok(Vec::new()));

    tick(&state, &source, &PollHandle::new());

    assert_eq!(source.calls.get(), 0);
    assert_eq!(state.borrow().unread_count, 4);
}

#[test]
fn tick_after_state_disposed_does_not_fetch() {
    let source = CountingSource::new(Ok(vec![unread("a")]));
    let mut updates = 0;

    block_on(poll_once(&source, &PollHandle::new(), |_: &mut dyn FnMut(&mut NotificationState)| {
        updates += 1;
        false
    }));

    assert_eq!(updates, 1);
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn tick_cancelled_mid_fetch_leaves_count_alone() {
    let handle = PollHandle::new();
    let source = FakeSource { result: Ok(Vec::new()), cancel_during: Some(handle.clone()) };
    let state = RefCell::new(NotificationState { unread_count: 3, ..NotificationState::default() });

    tick(&state, &source, &handle);

    assert_eq!(state.borrow().unread_count, 3);
}
