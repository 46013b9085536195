//! REST helpers for the auth and notification collaborators.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Lookups that may legitimately
//! come back empty (no session, no profile row) return `Ok(None)` so callers
//! can tell "absent" from "failed".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{Credentials, Notification, Profile, Session};
#[cfg(feature = "hydrate")]
use super::types::{NotificationEnvelope, SessionEnvelope};
use crate::config::ClientConfig;

/// Failure talking to an external collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> ApiError {
    if status == 401 { ApiError::Unauthorized } else { ApiError::Status(status) }
}

/// Source of the notification summary polled by the bell.
pub trait NotificationSource {
    /// Fetch every notification visible to the current user.
    fn fetch_notifications(&self) -> impl Future<Output = Result<Vec<Notification>, ApiError>>;
}

/// Thin HTTP client bound to the configured API base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn session_endpoint(&self) -> String {
        self.url("/auth/session")
    }

    fn profile_endpoint(&self, user_id: &str) -> String {
        self.url(&format!("/profiles/{user_id}"))
    }

    fn login_endpoint(&self) -> String {
        self.url("/auth/login")
    }

    fn logout_endpoint(&self) -> String {
        self.url("/auth/logout")
    }

    fn notifications_endpoint(&self) -> String {
        self.url("/notifications/user")
    }

    fn mark_read_endpoint(&self, id: &str) -> String {
        self.url(&format!("/notifications/{id}/read"))
    }

    /// Fetch the current session; `Ok(None)` when signed out.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn fetch_session(&self) -> Result<Option<Session>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.session_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if resp.status() == 401 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            let body: SessionEnvelope = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.session_endpoint();
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the profile row for a user; `Ok(None)` when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.profile_endpoint(user_id))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if resp.status() == 404 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            resp.json::<Profile>()
                .await
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.profile_endpoint(user_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Sign in with identifier + password.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` on rejected credentials, or another
    /// error if the request fails.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.login_endpoint())
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.login_endpoint(), credentials);
            Err(ApiError::Unavailable)
        }
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.logout_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.logout_endpoint();
            Err(ApiError::Unavailable)
        }
    }

    /// Mark one notification as read. The bell picks the change up on its
    /// next poll.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.mark_read_endpoint(id))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.mark_read_endpoint(id);
            Err(ApiError::Unavailable)
        }
    }
}

impl NotificationSource for ApiClient {
    async fn fetch_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.notifications_endpoint())
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            let body: NotificationEnvelope = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            body.notifications.ok_or(ApiError::MissingField("notifications"))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.notifications_endpoint();
            Err(ApiError::Unavailable)
        }
    }
}
