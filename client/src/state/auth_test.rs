use super::*;

fn session() -> Session {
    Session { user_id: "u1".to_owned(), email: Some("a@pharma.dz".to_owned()) }
}

fn profile(role: Role) -> Profile {
    Profile {
        role,
        is_active: true,
        full_name: None,
        pharmacy_name: None,
        company_name: None,
        wilaya: None,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn pending_state_is_loading_without_identity() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.session.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn resolved_drops_profile_without_session() {
    let state = AuthState::resolved(None, Some(profile(Role::Admin)));
    assert!(!state.loading);
    assert!(state.profile.is_none());
    assert_eq!(state.role(), None);
}

#[test]
fn resolved_keeps_profile_with_session() {
    let state = AuthState::resolved(Some(session()), Some(profile(Role::Supplier)));
    assert!(state.is_signed_in());
    assert_eq!(state.role(), Some(Role::Supplier));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_auth_state_settles_when_collaborator_is_unavailable() {
    let api = ApiClient::new(&crate::config::ClientConfig::default());
    let state = futures::executor::block_on(load_auth_state(&api));
    assert_eq!(state, AuthState::resolved(None, None));
}
