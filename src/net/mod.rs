//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the authentication endpoints, `http` is the bearer-attaching
//! fetch wrapper every page-level call goes through, and `types` defines the
//! shared wire schema.

pub mod api;
pub mod http;
pub mod types;
