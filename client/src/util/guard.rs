//! Route access decisions for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGuard` feeds the current auth snapshot through `decide` on every
//! relevant change and only performs side effects (navigation, logging) based
//! on the returned `GuardDecision`. Keeping the decision pure lets the
//! redirect rules be tested without a reactive runtime or a router.
//!
//! ORDERING
//! ========
//! Loading always wins: no redirect is produced until resolution completes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::{LOGIN_PATH, landing_path};
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Preconditions a protected view declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardRequirements {
    pub required_role: Option<Role>,
    pub require_active: bool,
}

impl Default for GuardRequirements {
    fn default() -> Self {
        Self { required_role: None, require_active: true }
    }
}

/// Navigation the guard asks the router to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Originating path, carried as navigation state so login can return.
    pub from: Option<String>,
    pub replace: bool,
}

/// Outcome of evaluating the guard against one auth snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session or profile resolution still in flight.
    Loading,
    /// No session; send the user to login.
    Unauthenticated(Redirect),
    /// Session present but no profile row yet. Not an error: provisioning
    /// can lag session creation, and redirecting here would loop.
    ProfileMissing { user_id: String },
    /// Signed in with the wrong role; send the user to their own landing view.
    RoleMismatch(Redirect),
    /// Render the protected view. `pending_activation` is advisory only.
    Authorized { pending_activation: bool },
}

/// What the guard renders for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Blank,
    Children,
}

impl GuardDecision {
    #[must_use]
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Unauthenticated(redirect) | Self::RoleMismatch(redirect) => Some(redirect),
            _ => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> GuardView {
        match self {
            Self::Loading => GuardView::Loading,
            Self::Authorized { .. } => GuardView::Children,
            Self::Unauthenticated(_) | Self::ProfileMissing { .. } | Self::RoleMismatch(_) => GuardView::Blank,
        }
    }

    #[must_use]
    pub fn pending_activation(&self) -> bool {
        matches!(self, Self::Authorized { pending_activation: true })
    }
}

/// Evaluate access for `current_path` under `requirements`.
#[must_use]
pub fn decide(auth: &AuthState, requirements: &GuardRequirements, current_path: &str) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Loading;
    }

    let Some(session) = auth.session.as_ref() else {
        return GuardDecision::Unauthenticated(Redirect {
            to: LOGIN_PATH.to_owned(),
            from: Some(current_path.to_owned()),
            replace: true,
        });
    };

    let Some(profile) = auth.profile.as_ref() else {
        return GuardDecision::ProfileMissing { user_id: session.user_id.clone() };
    };

    if let Some(required) = requirements.required_role {
        if profile.role != required {
            return GuardDecision::RoleMismatch(Redirect {
                to: landing_path(profile.role).to_owned(),
                from: None,
                replace: true,
            });
        }
    }

    let pending_activation = requirements.require_active && !profile.is_active && profile.role != Role::Admin;
    GuardDecision::Authorized { pending_activation }
}

/// Remembers the last redirect a guard issued.
///
/// Reactive inputs can settle on the same redirect several times (for
/// example the auth loader writing an unchanged snapshot). The latch lets
/// the first one through and suppresses identical repeats until the
/// decision stops asking for a redirect.
#[derive(Clone, Debug, Default)]
pub struct RedirectLatch {
    last: Option<Redirect>,
}

impl RedirectLatch {
    /// Feed the current decision's redirect; returns it when it should fire.
    pub fn observe(&mut self, redirect: Option<&Redirect>) -> Option<Redirect> {
        match redirect {
            None => {
                self.last = None;
                None
            }
            Some(next) if self.last.as_ref() == Some(next) => None,
            Some(next) => {
                self.last = Some(next.clone());
                Some(next.clone())
            }
        }
    }
}
