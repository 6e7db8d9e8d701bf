//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call in the app goes through [`api_url`] so the backend mount
//! point can be changed in one place (the SPA is served from the same origin
//! as the API gateway).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base path the backend REST API is mounted under.
pub const API_BASE_URL: &str = "/api";

/// Join a resource path onto the API base.
///
/// `path` is expected to start with `/` (e.g. `/auth/login`).
pub fn api_url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}
