use super::*;
use crate::net::types::{Profile, Session};

fn session() -> Session {
    Session { user_id: "u-42".to_owned(), email: None }
}

fn profile(role: Role, is_active: bool) -> Profile {
    Profile {
        role,
        is_active,
        full_name: None,
        pharmacy_name: None,
        company_name: None,
        wilaya: None,
    }
}

fn signed_in(role: Role, is_active: bool) -> AuthState {
    AuthState::resolved(Some(session()), Some(profile(role, is_active)))
}

fn requiring(role: Role) -> GuardRequirements {
    GuardRequirements { required_role: Some(role), require_active: true }
}

// =============================================================
// decide
// =============================================================

#[test]
fn loading_blocks_without_redirect() {
    for state in [
        AuthState::pending(),
        AuthState { loading: true, ..signed_in(Role::Admin, true) },
    ] {
        let decision = decide(&state, &requiring(Role::Supplier), "/supplier/dashboard");
        assert_eq!(decision, GuardDecision::Loading);
        assert!(decision.redirect().is_none());
        assert_eq!(decision.view(), GuardView::Loading);
    }
}

#[test]
fn missing_session_redirects_to_login_with_origin() {
    let state = AuthState::resolved(None, None);
    let decision = decide(&state, &GuardRequirements::default(), "/pharmacist/dashboard");
    assert_eq!(
        decision.redirect(),
        Some(&Redirect {
            to: "/login".to_owned(),
            from: Some("/pharmacist/dashboard".to_owned()),
            replace: true,
        })
    );
    assert_eq!(decision.view(), GuardView::Blank);
}

#[test]
fn missing_profile_renders_nothing_and_stays_put() {
    let state = AuthState::resolved(Some(session()), None);
    let decision = decide(&state, &requiring(Role::Admin), "/admin/dashboard");
    assert_eq!(decision, GuardDecision::ProfileMissing { user_id: "u-42".to_owned() });
    assert!(decision.redirect().is_none());
    assert_eq!(decision.view(), GuardView::Blank);
}

#[test]
fn role_mismatch_redirects_to_own_landing_path() {
    let cases = [
        (Role::Pharmacist, Role::Admin, "/pharmacist/dashboard"),
        (Role::Supplier, Role::Pharmacist, "/supplier/dashboard"),
        (Role::Admin, Role::Supplier, "/admin/dashboard"),
    ];
    for (actual, required, landing) in cases {
        let decision = decide(&signed_in(actual, true), &requiring(required), "/x");
        let redirect = decision.redirect().expect("redirect");
        assert_eq!(redirect.to, landing);
        assert!(redirect.replace);
        assert_eq!(redirect.from, None);
    }
}

#[test]
fn inactive_non_admin_is_advisory_only() {
    let decision = decide(&signed_in(Role::Supplier, false), &requiring(Role::Supplier), "/supplier/dashboard");
    assert_eq!(decision, GuardDecision::Authorized { pending_activation: true });
    assert!(decision.redirect().is_none());
    assert_eq!(decision.view(), GuardView::Children);
    assert!(decision.pending_activation());
}

#[test]
fn inactive_admin_bypasses_activation() {
    let decision = decide(&signed_in(Role::Admin, false), &requiring(Role::Admin), "/admin/dashboard");
    assert_eq!(decision, GuardDecision::Authorized { pending_activation: false });
}

#[test]
fn inactive_account_without_requirement_is_not_flagged() {
    let requirements = GuardRequirements { required_role: None, require_active: false };
    let decision = decide(&signed_in(Role::Pharmacist, false), &requirements, "/");
    assert!(!decision.pending_activation());
}

#[test]
fn matching_active_role_is_authorized() {
    let decision = decide(&signed_in(Role::Pharmacist, true), &requiring(Role::Pharmacist), "/pharmacist/dashboard");
    assert_eq!(decision, GuardDecision::Authorized { pending_activation: false });
}

#[test]
fn requirements_default_to_require_active() {
    let requirements = GuardRequirements::default();
    assert!(requirements.require_active);
    assert!(requirements.required_role.is_none());
}

// =============================================================
// RedirectLatch
// =============================================================

#[test]
fn latch_fires_once_for_repeated_inputs() {
    let state = AuthState::resolved(None, None);
    let mut latch = RedirectLatch::default();
    let mut fired = 0;
    for _ in 0..3 {
        let decision = decide(&state, &GuardRequirements::default(), "/admin/dashboard");
        if latch.observe(decision.redirect()).is_some() {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
}

#[test]
fn latch_rearms_after_leaving_redirect_state() {
    let target = Redirect { to: "/login".to_owned(), from: Some("/a".to_owned()), replace: true };
    let mut latch = RedirectLatch::default();
    assert!(latch.observe(Some(&target)).is_some());
    assert!(latch.observe(Some(&target)).is_none());
    assert!(latch.observe(None).is_none());
    assert_eq!(latch.observe(Some(&target)), Some(target));
}

#[test]
fn latch_fires_for_a_different_target() {
    let login = Redirect { to: "/login".to_owned(), from: Some("/a".to_owned()), replace: true };
    let landing = Redirect { to: "/supplier/dashboard".to_owned(), from: None, replace: true };
    let mut latch = RedirectLatch::default();
    assert!(latch.observe(Some(&login)).is_some());
    assert_eq!(latch.observe(Some(&landing)), Some(landing));
}
