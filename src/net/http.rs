//! Authenticated fetch wrapper for page-level REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Attaches the stored bearer credential to every outbound request and
//! enforces global session invalidation: any 401/403 observed here purges
//! the stored token and forces navigation to the login page, no matter
//! which page issued the request. Response bodies are never interpreted
//! here; callers parse what they asked for.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

/// HTTP method for a [`RequestConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

/// Request configuration accepted by [`authenticated_fetch`].
#[derive(Clone, Debug, Default)]
pub struct RequestConfig {
    pub method: Method,
    /// JSON body; when set and no content-type header is supplied, the
    /// request defaults to `application/json`.
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestConfig {
    /// A plain GET with no body or extra headers.
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying a JSON body.
    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            headers: Vec::new(),
        }
    }
}

/// Failure surfaced to callers of [`authenticated_fetch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The backend rejected the credential (401/403). The stored token has
    /// already been purged and navigation to login forced; this variant
    /// still reaches non-browser callers and tests.
    AuthFailure(u16),
    /// The request failed before a response was obtained. The stored token
    /// is left untouched.
    Transport(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthFailure(status) => write!(f, "authentication required or forbidden ({status})"),
            Self::Transport(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Format a token as an `Authorization` header value.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response status invalidates the current session.
pub fn is_auth_failure(status: u16) -> bool {
    status == 401 || status == 403
}

/// Whether the caller already supplied a content-type header.
pub fn has_content_type(headers: &[(String, String)]) -> bool {
    headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
}

/// Perform a request against `path` (relative to the API base) with the
/// stored bearer credential attached.
///
/// # Errors
///
/// [`FetchError::AuthFailure`] on 401/403 (after purging the stored token
/// and forcing navigation to login), [`FetchError::Transport`] when no
/// response was obtained. Any other status is returned as a success for
/// the caller to interpret.
#[cfg(feature = "hydrate")]
pub async fn authenticated_fetch(
    path: &str,
    config: RequestConfig,
) -> Result<gloo_net::http::Response, FetchError> {
    let url = crate::config::api_url(path);
    let mut builder = match config.method {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Put => gloo_net::http::Request::put(&url),
        Method::Delete => gloo_net::http::Request::delete(&url),
    };

    if let Some(token) = crate::util::token_store::load() {
        builder = builder.header("Authorization", &bearer_header(&token));
    }
    for (name, value) in &config.headers {
        builder = builder.header(name, value);
    }

    let resp = match config.body {
        Some(body) => {
            if !has_content_type(&config.headers) {
                builder = builder.header("Content-Type", "application/json");
            }
            builder
                .body(body.to_string())
                .map_err(|e| FetchError::Transport(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    }
    .map_err(|e| FetchError::Transport(e.to_string()))?;

    if is_auth_failure(resp.status()) {
        log::warn!("authenticated request to {path} rejected ({})", resp.status());
        crate::util::token_store::clear();
        force_login_redirect();
        return Err(FetchError::AuthFailure(resp.status()));
    }

    Ok(resp)
}

#[cfg(feature = "hydrate")]
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(crate::util::auth::LOGIN_PATH);
    }
}
