//! Durable storage for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single well-known localStorage slot shared by the session manager
//! (which writes it on adopt and clears it on logout) and the authenticated
//! request helper (which reads it per request and clears it on 401/403).
//! Keeping both behind this module is what makes credential invalidation
//! globally visible.

/// localStorage key holding the bearer token.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ridemumbai_auth_token";

/// Read the stored token, if any. Returns `None` off-browser.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`, replacing any previous credential.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Delete the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
