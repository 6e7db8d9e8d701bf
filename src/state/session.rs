//! Auth-session state and lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". Route guards and
//! user-aware components read [`SessionState`] through the [`Session`]
//! handle provided via context; login/register/logout/refresh all mutate
//! it here and nowhere else.
//!
//! CONCURRENCY
//! ===========
//! Session-mutating operations are serialized through a single in-flight
//! slot: a second login/register/refresh arriving while one is outstanding
//! is rejected (or skipped, for refresh) instead of racing on user/token.
//! The slot and the loading flag are released by a drop guard on every
//! exit path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::util::token_store;

/// In-memory session: profile, credential, and loading flag.
///
/// `user` and `token` are always set and cleared together; authentication
/// is defined as both being present.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True while a login/register/refresh/startup check is in flight.
    /// Starts true so guards can distinguish "haven't checked storage yet"
    /// from "checked, unauthenticated".
    pub loading: bool,
    /// Single-slot serialization of session-mutating operations.
    pub op_in_flight: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
            op_in_flight: false,
        }
    }
}

impl SessionState {
    /// A user is authenticated iff both a profile and a credential are held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Commit a verified profile and its credential together.
    pub fn adopt(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Drop profile and credential together.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}

/// Copyable handle to the shared session signal, provided once via context
/// by [`crate::app::App`].
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

/// Releases the in-flight slot and loading flag on every exit path,
/// including early returns.
struct OpGuard(Session);

impl Drop for OpGuard {
    fn drop(&mut self) {
        self.0.state.update(|s| {
            s.loading = false;
            s.op_in_flight = false;
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive snapshot of the current session state.
    pub fn snapshot(self) -> SessionState {
        self.state.get()
    }

    /// Current user, reactively.
    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    fn begin_op(self) -> Option<OpGuard> {
        let mut acquired = false;
        self.state.update(|s| {
            if !s.op_in_flight {
                s.op_in_flight = true;
                s.loading = true;
                acquired = true;
            }
        });
        // the guard must only exist when the slot was actually taken;
        // constructing it eagerly would release someone else's slot on drop
        if acquired { Some(OpGuard(self)) } else { None }
    }

    /// One-time startup check: adopt a stored credential if one exists,
    /// otherwise finish loading without any network call.
    pub async fn init_from_storage(self) {
        match token_store::load() {
            Some(token) => {
                let Some(_guard) = self.begin_op() else {
                    return;
                };
                log::info!("found stored token, fetching profile");
                self.adopt_token(token).await;
            }
            None => {
                log::debug!("no stored token");
                self.state.update(|s| s.loading = false);
            }
        }
    }

    /// Exchange credentials for a session via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns a display-ready message when the backend rejects the
    /// credentials, the request fails in transit, or another sign-in is
    /// already in flight. Session and stored token are cleared on failure.
    pub async fn login(self, username: &str, password: &str) -> Result<(), String> {
        let Some(_guard) = self.begin_op() else {
            return Err("Another sign-in is already in progress.".to_owned());
        };
        match crate::net::api::login(username, password).await {
            Ok(token) => {
                self.adopt_token(token).await;
                Ok(())
            }
            Err(message) => {
                self.state.update(SessionState::clear);
                token_store::clear();
                Err(message)
            }
        }
    }

    /// Create an account and start a session via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::login`].
    pub async fn register(self, name: &str, email: &str, password: &str) -> Result<(), String> {
        let Some(_guard) = self.begin_op() else {
            return Err("Another sign-in is already in progress.".to_owned());
        };
        match crate::net::api::register(name, email, password).await {
            Ok(token) => {
                self.adopt_token(token).await;
                Ok(())
            }
            Err(message) => {
                self.state.update(SessionState::clear);
                token_store::clear();
                Err(message)
            }
        }
    }

    /// Re-fetch the profile for the current token (in-memory or stored).
    /// A missing token is a logged no-op, not an error.
    pub async fn refresh(self) {
        let token = self
            .state
            .with_untracked(|s| s.token.clone())
            .or_else(token_store::load);
        let Some(token) = token else {
            log::debug!("refresh requested with no token, nothing to do");
            return;
        };
        let Some(_guard) = self.begin_op() else {
            log::debug!("refresh skipped, another session operation is in flight");
            return;
        };
        self.adopt_token(token).await;
    }

    /// Synchronously drop the session and the stored credential.
    pub fn logout(self) {
        token_store::clear();
        self.state.update(|s| {
            s.clear();
            s.loading = false;
        });
        log::info!("logged out");
    }

    /// Exchange a candidate token for a profile and commit both, or clear
    /// everything when the token turns out to be invalid. Callers must hold
    /// the op guard.
    async fn adopt_token(self, token: String) {
        match crate::net::api::fetch_profile(&token).await {
            Ok(user) => {
                token_store::save(&token);
                self.state.update(|s| s.adopt(user, token));
            }
            Err(message) => {
                log::warn!("profile fetch failed, clearing session: {message}");
                token_store::clear();
                self.state.update(SessionState::clear);
            }
        }
    }
}
