//! Small display-formatting helpers shared across pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a rupee amount for display.
pub fn format_inr(amount: f64) -> String {
    format!("\u{20b9}{amount:.2}")
}

/// Friendly display name from a username: the local part when the username
/// is an email address, the username itself otherwise.
pub fn display_name(username: &str) -> &str {
    match username.split_once('@') {
        Some((local, _)) => local,
        None => username,
    }
}
