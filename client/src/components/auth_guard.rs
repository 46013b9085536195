//! Route guard wrapping protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their content in `AuthGuard`, passing the read-only
//! `AuthAccessor` explicitly. The guard memoizes the access decision, so the
//! redirect effect and the rendered branch only react to real changes in the
//! decision rather than every write to auth state.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::auth::AuthAccessor;
use crate::util::guard::{GuardDecision, GuardRequirements, GuardView, Redirect, RedirectLatch, decide};

/// Advisory flag for descendants of a guard: the account is signed in but
/// still awaiting administrator validation.
#[derive(Clone, Copy, Debug)]
pub struct PendingActivation(pub Signal<bool>);

/// Renders `children` only once access has been established.
///
/// While auth resolves a loading indicator is shown. Signed-out users are
/// sent to `/login` with the current path as navigation state; users with the
/// wrong role are sent to their own landing view.
#[component]
pub fn AuthGuard(
    auth: AuthAccessor,
    #[prop(optional)] required_role: Option<Role>,
    #[prop(default = true)] require_active: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let requirements = GuardRequirements { required_role, require_active };
    let location = use_location();
    let decision = Memo::new(move |_| decide(&auth.get(), &requirements, &location.pathname.get()));

    let pending = Memo::new(move |_| decision.get().pending_activation());
    provide_context(PendingActivation(pending.into()));

    let navigate = use_navigate();
    let latch = StoredValue::new(RedirectLatch::default());
    Effect::new(move || {
        let decision = decision.get();
        log_decision(&decision);
        let redirect = latch.try_update_value(|l| l.observe(decision.redirect())).flatten();
        if let Some(redirect) = redirect {
            navigate(&redirect.to, navigate_options(&redirect));
        }
    });

    let view_state = Memo::new(move |_| decision.get().view());

    view! {
        {move || match view_state.get() {
            GuardView::Loading => {
                view! {
                    <div class="auth-guard__loading" role="status">
                        <span class="auth-guard__spinner"></span>
                        <p>"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
            GuardView::Blank => ().into_any(),
            GuardView::Children => children().into_any(),
        }}
    }
}

fn log_decision(decision: &GuardDecision) {
    match decision {
        GuardDecision::ProfileMissing { user_id } => {
            leptos::logging::log!("profile not found for user {user_id}");
        }
        GuardDecision::Authorized { pending_activation: true } => {
            leptos::logging::log!("account not active yet; showing pending-activation notice");
        }
        _ => {}
    }
}

fn navigate_options(redirect: &Redirect) -> NavigateOptions {
    #[cfg(feature = "hydrate")]
    {
        let mut options = NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() };
        if let Some(from) = redirect.from.as_deref() {
            options.state = leptos_router::location::State::new(Some(wasm_bindgen::JsValue::from_str(from)));
        }
        options
    }
    #[cfg(not(feature = "hydrate"))]
    {
        NavigateOptions { replace: redirect.replace, ..NavigateOptions::default() }
    }
}
