//! Travel history page listing past journeys.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::Journey;
use crate::util::format::format_inr;

#[cfg(any(test, feature = "hydrate"))]
fn history_failed_message(status: u16) -> String {
    format!("History request failed (status {status})")
}

#[component]
pub fn TravelHistoryPage() -> impl IntoView {
    let journeys = RwSignal::new(Vec::<Journey>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let config = crate::net::http::RequestConfig::get();
        match crate::net::http::authenticated_fetch("/tickets/history", config).await {
            Ok(resp) if resp.ok() => match resp.json::<Vec<Journey>>().await {
                Ok(items) => journeys.set(items),
                Err(e) => error.set(e.to_string()),
            },
            Ok(resp) => error.set(history_failed_message(resp.status())),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    view! {
        <div class="page">
            <Navbar/>
            <section class="history">
                <h1>"Travel History"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="history__error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading journeys..."</p> }
                >
                    <Show when=move || journeys.get().is_empty() && error.get().is_empty()>
                        <p class="history__empty">"No journeys yet. Book your first ticket!"</p>
                    </Show>
                    <div class="history__list">
                        {move || {
                            journeys
                                .get()
                                .into_iter()
                                .map(|journey| {
                                    view! {
                                        <div class="history-row">
                                            <span class="history-row__stations">
                                                {journey.origin} " → " {journey.destination}
                                            </span>
                                            <span class="history-row__line">{journey.line}</span>
                                            <span class="history-row__time">{journey.travelled_at}</span>
                                            <span class="history-row__fare">{format_inr(journey.fare)}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
        </div>
    }
}
