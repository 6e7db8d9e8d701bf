//! Route planning page: search the network for route options.

#[cfg(test)]
#[path = "route_planning_test.rs"]
mod route_planning_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::RouteOption;
use crate::util::format::format_inr;

/// Trimmed origin/destination pair, rejecting empty or identical stations.
fn validate_route_query(origin: &str, destination: &str) -> Result<(String, String), &'static str> {
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

#[cfg(any(test, feature = "hydrate"))]
fn search_failed_message(status: u16) -> String {
    format!("Route search failed (status {status})")
}

#[component]
pub fn RoutePlanningPage() -> impl IntoView {
    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<RouteOption>::new());
    let searched = RwSignal::new(false);
    let searching = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if searching.get() {
            return;
        }
        let (origin_value, destination_value) =
            match validate_route_query(&origin.get(), &destination.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        searching.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let config = crate::net::http::RequestConfig::post(serde_json::json!({
                "origin": origin_value,
                "destination": destination_value,
            }));
            match crate::net::http::authenticated_fetch("/routes/search", config).await {
                Ok(resp) if resp.ok() => match resp.json::<Vec<RouteOption>>().await {
                    Ok(options) => {
                        results.set(options);
                        searched.set(true);
                    }
                    Err(e) => error.set(e.to_string()),
                },
                Ok(resp) => error.set(search_failed_message(resp.status())),
                Err(e) => error.set(e.to_string()),
            }
            searching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (origin_value, destination_value);
            searching.set(false);
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <section class="route-planning">
                <h1>"Plan Your Route"</h1>
                <form class="route-planning__form" on:submit=on_submit>
                    <input
                        class="route-planning__input"
                        type="text"
                        placeholder="From station"
                        prop:value=move || origin.get()
                        on:input=move |ev| origin.set(event_target_value(&ev))
                    />
                    <input
                        class="route-planning__input"
                        type="text"
                        placeholder="To station"
                        prop:value=move || destination.get()
                        on:input=move |ev| destination.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || searching.get()>
                        {move || if searching.get() { "Searching..." } else { "Search" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="route-planning__error">{move || error.get()}</p>
                </Show>
                <Show when=move || searched.get() && results.get().is_empty()>
                    <p class="route-planning__empty">"No routes found between those stations."</p>
                </Show>
                <div class="route-planning__results">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <div class="route-card">
                                        <span class="route-card__line">{option.line}</span>
                                        <span class="route-card__stations">
                                            {option.origin} " → " {option.destination}
                                        </span>
                                        <span class="route-card__meta">
                                            {option.duration_minutes} " min, "
                                            {option.transfers} " transfers"
                                        </span>
                                        <span class="route-card__fare">{format_inr(option.fare)}</span>
                                        <a class="btn" href="/booking">
                                            "Book"
                                        </a>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}
