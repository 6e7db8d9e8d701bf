//! Ticket booking page: book a journey against the wallet.

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::{BookingConfirmation, TicketType};
use crate::state::session::Session;
use crate::util::format::format_inr;

/// Trimmed origin/destination pair, rejecting empty or identical stations.
fn validate_booking_input(origin: &str, destination: &str) -> Result<(String, String), &'static str> {
    let origin = origin.trim();
    let destination = destination.trim();
    if origin.is_empty() || destination.is_empty() {
        return Err("Enter both origin and destination.");
    }
    if origin.eq_ignore_ascii_case(destination) {
        return Err("Origin and destination must differ.");
    }
    Ok((origin.to_owned(), destination.to_owned()))
}

/// Map the `<select>` value onto a ticket type; unknown values fall back to
/// a single ticket.
fn parse_ticket_type(value: &str) -> TicketType {
    if value == "return" { TicketType::Return } else { TicketType::Single }
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_failed_message(status: u16) -> String {
    format!("Booking failed (status {status})")
}

#[component]
pub fn TicketBookingPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let ticket_type = RwSignal::new(TicketType::Single);
    let confirmation = RwSignal::new(None::<BookingConfirmation>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (origin_value, destination_value) =
            match validate_booking_input(&origin.get(), &destination.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());
        confirmation.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let body = crate::net::types::BookingRequest {
                origin: origin_value,
                destination: destination_value,
                ticket_type: ticket_type.get_untracked(),
            };
            let config = crate::net::http::RequestConfig::post(
                serde_json::to_value(&body).unwrap_or_default(),
            );
            match crate::net::http::authenticated_fetch("/tickets", config).await {
                Ok(resp) if resp.ok() => match resp.json::<BookingConfirmation>().await {
                    Ok(booked) => {
                        confirmation.set(Some(booked));
                        // fare was charged against the wallet; pick up the new balance
                        session.refresh().await;
                    }
                    Err(e) => error.set(e.to_string()),
                },
                Ok(resp) => error.set(booking_failed_message(resp.status())),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (origin_value, destination_value, session);
            busy.set(false);
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <section class="booking">
                <h1>"Book a Ticket"</h1>
                <form class="booking__form" on:submit=on_submit>
                    <input
                        class="booking__input"
                        type="text"
                        placeholder="From station"
                        prop:value=move || origin.get()
                        on:input=move |ev| origin.set(event_target_value(&ev))
                    />
                    <input
                        class="booking__input"
                        type="text"
                        placeholder="To station"
                        prop:value=move || destination.get()
                        on:input=move |ev| destination.set(event_target_value(&ev))
                    />
                    <select
                        class="booking__select"
                        on:change=move |ev| ticket_type.set(parse_ticket_type(&event_target_value(&ev)))
                    >
                        <option value="single">"Single"</option>
                        <option value="return">"Return"</option>
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Booking..." } else { "Book Ticket" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="booking__error">{move || error.get()}</p>
                </Show>
                {move || {
                    confirmation
                        .get()
                        .map(|booked| {
                            view! {
                                <div class="booking__confirmation">
                                    <h2>"Ticket Booked"</h2>
                                    <p>
                                        "Reference: " <strong>{booked.booking_ref}</strong>
                                    </p>
                                    <p>"Fare charged: " {format_inr(booked.fare)}</p>
                                </div>
                            }
                        })
                }}
            </section>
        </div>
    }
}
