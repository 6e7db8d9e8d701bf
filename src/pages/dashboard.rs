//! Commuter dashboard, the authenticated landing route for commuters.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::Session;
use crate::util::format::{display_name, format_inr};

const QUICK_ACTIONS: [(&str, &str, &str); 4] = [
    ("Plan Route", "Find the best route for your journey", "/route-planning"),
    ("Book Ticket", "Quick ticket booking for your trip", "/booking"),
    ("Travel History", "Review your past journeys", "/history"),
    ("Profile & Wallet", "Manage your account and balance", "/profile"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let greeting = move || {
        session
            .user()
            .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", display_name(&u.username)))
    };
    let balance = move || {
        session
            .user()
            .and_then(|u| u.wallet_balance)
            .map_or_else(|| "--".to_owned(), format_inr)
    };

    view! {
        <div class="page">
            <Navbar/>
            <section class="dashboard">
                <h1>{greeting}</h1>
                <div class="dashboard__wallet">
                    <span class="dashboard__wallet-label">"Wallet Balance"</span>
                    <span class="dashboard__wallet-amount">{balance}</span>
                    <a class="btn" href="/profile">
                        "Top Up"
                    </a>
                </div>
                <div class="dashboard__actions">
                    {QUICK_ACTIONS
                        .into_iter()
                        .map(|(title, blurb, path)| {
                            view! {
                                <a class="dashboard__action-card" href=path>
                                    <h2>{title}</h2>
                                    <p>{blurb}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
