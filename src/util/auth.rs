//! Route-access rules for the guard layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`decide`] is the single authorization decision in the app: every guard
//! feeds it the current session state and a route requirement and acts on
//! the answer. Pages never compare role strings themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const COMMUTER_HOME: &str = "/commuter-dashboard";
pub const ADMIN_HOME: &str = "/admin/dashboard";

/// Who may view a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Only unauthenticated visitors (welcome, login, register).
    PublicOnly,
    /// Authenticated commuters; admins are sent to their own home.
    Commuter,
    /// Authenticated administrators only.
    Admin,
}

/// Outcome of evaluating a route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session check still in flight; render a neutral indicator, never the
    /// wrapped view and never a redirect.
    Loading,
    /// Render the wrapped view.
    Render,
    /// Navigate away to the given path.
    Redirect(&'static str),
}

/// Landing route for an authenticated user of the given role.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_HOME,
        Role::Commuter => COMMUTER_HOME,
    }
}

/// Evaluate `access` against the current session.
///
/// Pure function of session state; guards re-run it whenever the session
/// changes, so there is no terminal state.
pub fn decide(state: &SessionState, access: RouteAccess) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    let role = match state.role() {
        Some(role) if state.is_authenticated() => Some(role),
        _ => None,
    };
    match (access, role) {
        (RouteAccess::PublicOnly, Some(role)) => RouteDecision::Redirect(home_path(role)),
        (RouteAccess::PublicOnly, None) => RouteDecision::Render,
        (RouteAccess::Commuter | RouteAccess::Admin, None) => RouteDecision::Redirect(LOGIN_PATH),
        (RouteAccess::Commuter, Some(Role::Admin)) => RouteDecision::Redirect(ADMIN_HOME),
        (RouteAccess::Admin, Some(Role::Commuter)) => RouteDecision::Redirect(COMMUTER_HOME),
        (RouteAccess::Commuter, Some(Role::Commuter)) | (RouteAccess::Admin, Some(Role::Admin)) => {
            RouteDecision::Render
        }
    }
}
