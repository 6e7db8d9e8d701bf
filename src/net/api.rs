//! REST calls for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since credentials only exist
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, String>` with a message fit for form
//! display. A non-2xx status and a transport failure are both errors; the
//! session manager deliberately does not distinguish them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("Login failed (status {status})")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("Registration failed (status {status})")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_failed_message(status: u16) -> String {
    format!("Profile fetch failed (status {status})")
}

/// Prefer the backend's `{ "message": ... }` over the generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn message_or_fallback(body: &str, fallback: String) -> String {
    serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or(fallback)
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns a display-ready message when the backend rejects the credentials
/// or the request fails in transit.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/auth/login"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = login_failed_message(resp.status());
            let body = resp.text().await.unwrap_or_default();
            return Err(message_or_fallback(&body, fallback));
        }
        let body: super::types::AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account and receive a bearer token via `POST /auth/register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(name: &str, email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&crate::config::api_url("/auth/register"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = register_failed_message(resp.status());
            let body = resp.text().await.unwrap_or_default();
            return Err(message_or_fallback(&body, fallback));
        }
        let body: super::types::AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the profile a candidate token belongs to via `GET /users/me`.
///
/// A 401/403 here means the token is invalid or expired; callers treat any
/// error as "this credential is no longer good".
///
/// # Errors
///
/// Returns a message on transport failure, a non-2xx status, or an
/// unparseable profile body.
pub async fn fetch_profile(token: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&crate::config::api_url("/users/me"))
            .header("Authorization", &super::http::bearer_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(profile_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
