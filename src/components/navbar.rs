//! Top navigation bar for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation items are derived from the session role through [`nav_items`];
//! the logout button clears the session synchronously and returns to login.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::auth::{LOGIN_PATH, home_path};
use crate::util::format::{display_name, format_inr};

/// Navigation entries (label, path) for a role.
pub fn nav_items(role: Role) -> Vec<(&'static str, &'static str)> {
    match role {
        Role::Admin => vec![
            ("Dashboard", "/admin/dashboard"),
            ("Routes", "/admin/routes"),
            ("Schedules", "/admin/schedules"),
            ("Users", "/admin/users"),
            ("Notifications", "/admin/notifications"),
        ],
        Role::Commuter => vec![
            ("Dashboard", "/commuter-dashboard"),
            ("Plan Route", "/route-planning"),
            ("Book Ticket", "/booking"),
            ("History", "/history"),
            ("Profile", "/profile"),
        ],
    }
}

/// Human-readable role label for the identity chip.
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administrator",
        Role::Commuter => "Commuter",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let brand_target = move || session.snapshot().role().map_or("/", home_path);
    let identity = move || {
        session
            .user()
            .map(|u| format!("{} ({})", display_name(&u.username), role_label(u.role)))
    };
    let wallet = move || session.user().and_then(|u| u.wallet_balance).map(format_inr);

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href=brand_target>
                "RideMumbai"
            </a>
            <nav class="navbar__links">
                {move || {
                    session
                        .user()
                        .map(|user| {
                            nav_items(user.role)
                                .into_iter()
                                .map(|(label, path)| {
                                    view! {
                                        <a class="navbar__link" href=path>
                                            {label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                }}
            </nav>
            <span class="navbar__spacer"></span>
            {move || {
                wallet()
                    .map(|balance| {
                        view! { <span class="navbar__wallet">{balance}</span> }
                    })
            }}
            <span class="navbar__identity">{identity}</span>
            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
