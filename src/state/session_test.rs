use super::*;

fn commuter() -> User {
    User {
        user_id: 7,
        username: "asha@example.com".to_owned(),
        email: "asha@example.com".to_owned(),
        role: Role::Commuter,
        wallet_balance: Some(120.0),
    }
}

fn admin() -> User {
    User {
        user_id: 1,
        username: "ops".to_owned(),
        email: "ops@ridemumbai.example".to_owned(),
        role: Role::Admin,
        wallet_balance: None,
    }
}

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.op_in_flight);
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn authenticated_requires_both_user_and_token() {
    let mut state = SessionState::default();
    state.user = Some(commuter());
    assert!(!state.is_authenticated());

    let mut state = SessionState::default();
    state.token = Some("t1".to_owned());
    assert!(!state.is_authenticated());
}

#[test]
fn adopt_sets_user_and_token_together() {
    let mut state = SessionState::default();
    state.adopt(commuter(), "t1".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Commuter));
    assert_eq!(state.token.as_deref(), Some("t1"));
}

#[test]
fn clear_drops_user_and_token_together() {
    let mut state = SessionState::default();
    state.adopt(admin(), "t1".to_owned());
    state.clear();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn re_adopt_after_clear_restores_authentication() {
    let mut state = SessionState::default();
    state.adopt(commuter(), "t1".to_owned());
    state.clear();
    state.adopt(admin(), "t2".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(state.token.as_deref(), Some("t2"));
}

#[test]
fn adopt_replaces_previous_session_wholesale() {
    let mut state = SessionState::default();
    state.adopt(commuter(), "t1".to_owned());
    state.adopt(admin(), "t2".to_owned());
    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(state.token.as_deref(), Some("t2"));
}
