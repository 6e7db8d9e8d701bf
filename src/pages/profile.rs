//! Profile page: account details and wallet top-up.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::Session;
use crate::util::format::format_inr;

/// Largest single top-up the backend accepts.
const MAX_TOPUP: f64 = 10_000.0;

/// Parse and bound a top-up amount entered as text.
fn validate_topup_amount(input: &str) -> Result<f64, &'static str> {
    let amount: f64 = input.trim().parse().map_err(|_| "Enter a valid amount.")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero.");
    }
    if amount > MAX_TOPUP {
        return Err("Maximum top-up is \u{20b9}10000.00.");
    }
    Ok(amount)
}

#[cfg(any(test, feature = "hydrate"))]
fn topup_failed_message(status: u16) -> String {
    format!("Top-up failed (status {status})")
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let amount = RwSignal::new(String::new());
    let flash = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_topup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let amount_value = match validate_topup_amount(&amount.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let body = crate::net::types::TopUpRequest { amount: amount_value };
            let config = crate::net::http::RequestConfig::post(
                serde_json::to_value(&body).unwrap_or_default(),
            );
            match crate::net::http::authenticated_fetch("/wallet/topup", config).await {
                Ok(resp) if resp.ok() => {
                    amount.set(String::new());
                    // balance changed server-side; re-fetch the profile
                    session.refresh().await;
                    flash.set(format!("Added {} to your wallet.", format_inr(amount_value)));
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
                        flash.set(String::new());
                    });
                }
                Ok(resp) => error.set(topup_failed_message(resp.status())),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (amount_value, session);
            busy.set(false);
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <section class="profile">
                <h1>"Your Profile"</h1>
                {move || {
                    session
                        .user()
                        .map(|user| {
                            view! {
                                <div class="profile__details">
                                    <p>
                                        "Name: " <strong>{user.username.clone()}</strong>
                                    </p>
                                    <p>
                                        "Email: " <strong>{user.email.clone()}</strong>
                                    </p>
                                    <p>
                                        "Wallet: "
                                        <strong>
                                            {user.wallet_balance.map_or_else(|| "--".to_owned(), format_inr)}
                                        </strong>
                                    </p>
                                </div>
                            }
                        })
                }}
                <form class="profile__topup" on:submit=on_topup>
                    <h2>"Top Up Wallet"</h2>
                    <input
                        class="profile__topup-input"
                        type="number"
                        min="1"
                        step="0.01"
                        placeholder="Amount in rupees"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Processing..." } else { "Add Money" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="profile__error">{move || error.get()}</p>
                </Show>
                <Show when=move || !flash.get().is_empty()>
                    <p class="profile__flash">{move || flash.get()}</p>
                </Show>
            </section>
        </div>
    }
}
