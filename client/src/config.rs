//! Client configuration and routing tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ClientConfig` is provided through Leptos context by `App`; components read
//! intervals and the API base from it instead of hard-coding them. The role
//! landing table is the single place that maps a role to its home view.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::net::types::Role;

/// Default notification poll period.
pub const NOTIFICATION_POLL_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Default directory carousel rotation period.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(3);

/// Number of directory entries visible at once.
pub const CAROUSEL_WINDOW: usize = 3;

/// Path of the login view; guards redirect here when signed out.
pub const LOGIN_PATH: &str = "/login";

const DEFAULT_API_BASE: &str = "/api";

/// Canonical role → landing path table.
pub const ROLE_LANDING_PATHS: [(Role, &str); 3] = [
    (Role::Admin, "/admin/dashboard"),
    (Role::Pharmacist, "/pharmacist/dashboard"),
    (Role::Supplier, "/supplier/dashboard"),
];

/// Landing view for a role.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    ROLE_LANDING_PATHS
        .iter()
        .find(|(r, _)| *r == role)
        .map_or(LOGIN_PATH, |(_, path)| path)
}

/// Runtime knobs shared by client components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the auth/notification collaborators, without trailing slash.
    pub api_base: String,
    pub notification_poll_interval: Duration,
    pub carousel_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: normalize_api_base(option_env!("MEDSUPPLY_API_BASE").unwrap_or(DEFAULT_API_BASE)),
            notification_poll_interval: NOTIFICATION_POLL_INTERVAL,
            carousel_interval: CAROUSEL_INTERVAL,
        }
    }
}

/// Trim whitespace and trailing slashes; fall back to `/api` when empty.
#[must_use]
pub fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
