//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth loader in `app` is the single writer. Route guards and
//! identity-aware components read through `AuthAccessor`, a read-only view
//! handed to them explicitly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Profile, Role, Session};

/// Session + profile resolution state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the loader has run.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, profile: None, loading: true }
    }

    /// Resolved state; `profile` is ignored without a session.
    #[must_use]
    pub fn resolved(session: Option<Session>, profile: Option<Profile>) -> Self {
        let profile = if session.is_some() { profile } else { None };
        Self { session, profile, loading: false }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }
}

/// Read-only handle on the shared auth state.
#[derive(Clone, Copy, Debug)]
pub struct AuthAccessor(Signal<AuthState>);

impl AuthAccessor {
    pub fn new(source: impl Into<Signal<AuthState>>) -> Self {
        Self(source.into())
    }

    /// Tracked read; re-runs the surrounding effect or view on change.
    pub fn get(&self) -> AuthState {
        self.0.get()
    }
}

/// Resolve the session, then its profile.
///
/// Lookup failures are logged and treated as absent so guards settle on a
/// decision instead of showing the loading state forever.
pub async fn load_auth_state(api: &ApiClient) -> AuthState {
    let session = match api.fetch_session().await {
        Ok(session) => session,
        Err(e) => {
            leptos::logging::warn!("session lookup failed: {e}");
            None
        }
    };
    let Some(session) = session else {
        return AuthState::resolved(None, None);
    };
    let profile = match api.fetch_profile(&session.user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            leptos::logging::warn!("profile lookup failed for user {}: {e}", session.user_id);
            None
        }
    };
    AuthState::resolved(Some(session), profile)
}
