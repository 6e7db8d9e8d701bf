use super::*;
use crate::net::types::User;

fn session(user: Option<User>, token: Option<&str>, loading: bool) -> SessionState {
    SessionState {
        user,
        token: token.map(str::to_owned),
        loading,
        op_in_flight: false,
    }
}

fn commuter() -> User {
    User {
        user_id: 7,
        username: "asha@example.com".to_owned(),
        email: "asha@example.com".to_owned(),
        role: Role::Commuter,
        wallet_balance: Some(50.0),
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
fn loading_always_wins_regardless_of_access() {
    let state = session(None, None, true);
    assert_eq!(decide(&state, RouteAccess::PublicOnly), RouteDecision::Loading);
    assert_eq!(decide(&state, RouteAccess::Commuter), RouteDecision::Loading);
    assert_eq!(decide(&state, RouteAccess::Admin), RouteDecision::Loading);
}

#[test]
fn loading_wins_even_when_already_authenticated() {
    let state = session(Some(commuter()), Some("t"), true);
    assert_eq!(decide(&state, RouteAccess::Commuter), RouteDecision::Loading);
}

#[test]
fn unauthenticated_protected_route_redirects_to_login() {
    let state = session(None, None, false);
    assert_eq!(decide(&state, RouteAccess::Commuter), RouteDecision::Redirect(LOGIN_PATH));
    assert_eq!(decide(&state, RouteAccess::Admin), RouteDecision::Redirect(LOGIN_PATH));
}

#[test]
fn unauthenticated_public_route_renders() {
    let state = session(None, None, false);
    assert_eq!(decide(&state, RouteAccess::PublicOnly), RouteDecision::Render);
}

#[test]
fn authenticated_public_route_redirects_to_role_home() {
    let state = session(Some(commuter()), Some("t"), false);
    assert_eq!(decide(&state, RouteAccess::PublicOnly), RouteDecision::Redirect(COMMUTER_HOME));

    let state = session(Some(admin()), Some("t"), false);
    assert_eq!(decide(&state, RouteAccess::PublicOnly), RouteDecision::Redirect(ADMIN_HOME));
}

#[test]
fn admin_on_commuter_route_is_sent_home() {
    let state = session(Some(admin()), Some("t"), false);
    assert_eq!(decide(&state, RouteAccess::Commuter), RouteDecision::Redirect(ADMIN_HOME));
}

#[test]
fn commuter_on_admin_route_is_sent_home() {
    let state = session(Some(commuter()), Some("t"), false);
    assert_eq!(decide(&state, RouteAccess::Admin), RouteDecision::Redirect(COMMUTER_HOME));
}

#[test]
fn matching_role_renders() {
    let state = session(Some(commuter()), Some("t"), false);
    assert_eq!(decide(&state, RouteAccess::Commuter), RouteDecision::Render);

    let state = session(Some(admin()), Some("t"), false);
    assert_eq!(decide(&state, RouteAccess::Admin), RouteDecision::Render);
}

#[test]
fn half_cleared_session_counts_as_unauthenticated() {
    // user without token (or the reverse) must never render a protected view
    let state = session(Some(commuter()), None, false);
    assert_eq!(decide(&state, RouteAccess::Commuter), RouteDecision::Redirect(LOGIN_PATH));
    assert_eq!(decide(&state, RouteAccess::PublicOnly), RouteDecision::Render);
}

#[test]
fn home_path_maps_roles() {
    assert_eq!(home_path(Role::Admin), ADMIN_HOME);
    assert_eq!(home_path(Role::Commuter), COMMUTER_HOME);
}
