//! Shared client state provided via context.

pub mod session;
