//! Manage-routes page: list metro routes and add new ones.

#[cfg(test)]
#[path = "admin_routes_test.rs"]
mod admin_routes_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::MetroRoute;

/// Validated fields for a new route.
fn validate_new_route(
    name: &str,
    origin: &str,
    destination: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let origin = origin.trim();
    let destination = destination.trim();
    if name.is_empty() || origin.is_empty() || destination.is_empty() {
        return Err("Fill in route name, origin, and destination.");
    }
    if origin.eq_ignore_ascii_case(destination) {
        return Err("Origin and destination must differ.");
    }
    Ok((name.to_owned(), origin.to_owned(), destination.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn routes_failed_message(status: u16) -> String {
    format!("Route list request failed (status {status})")
}

#[cfg(any(test, feature = "hydrate"))]
fn add_route_failed_message(status: u16) -> String {
    format!("Adding route failed (status {status})")
}

#[cfg(feature = "hydrate")]
async fn load_routes(routes: RwSignal<Vec<MetroRoute>>, error: RwSignal<String>) {
    let config = crate::net::http::RequestConfig::get();
    match crate::net::http::authenticated_fetch("/admin/routes", config).await {
        Ok(resp) if resp.ok() => match resp.json::<Vec<MetroRoute>>().await {
            Ok(items) => routes.set(items),
            Err(e) => error.set(e.to_string()),
        },
        Ok(resp) => error.set(routes_failed_message(resp.status())),
        Err(e) => error.set(e.to_string()),
    }
}

#[component]
pub fn ManageRoutesPage() -> impl IntoView {
    let routes = RwSignal::new(Vec::<MetroRoute>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let name = RwSignal::new(String::new());
    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        load_routes(routes, error).await;
        loading.set(false);
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, origin_value, destination_value) =
            match validate_new_route(&name.get(), &origin.get(), &destination.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let body = crate::net::types::NewRoute {
                name: name_value,
                origin: origin_value,
                destination: destination_value,
            };
            let config = crate::net::http::RequestConfig::post(
                serde_json::to_value(&body).unwrap_or_default(),
            );
            match crate::net::http::authenticated_fetch("/admin/routes", config).await {
                Ok(resp) if resp.ok() => {
                    name.set(String::new());
                    origin.set(String::new());
                    destination.set(String::new());
                    load_routes(routes, error).await;
                }
                Ok(resp) => error.set(add_route_failed_message(resp.status())),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, origin_value, destination_value);
            busy.set(false);
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <section class="manage-routes">
                <h1>"Manage Routes"</h1>
                <form class="manage-routes__form" on:submit=on_add>
                    <input
                        class="manage-routes__input"
                        type="text"
                        placeholder="Route name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="manage-routes__input"
                        type="text"
                        placeholder="Origin station"
                        prop:value=move || origin.get()
                        on:input=move |ev| origin.set(event_target_value(&ev))
                    />
                    <input
                        class="manage-routes__input"
                        type="text"
                        placeholder="Destination station"
                        prop:value=move || destination.get()
                        on:input=move |ev| destination.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Adding..." } else { "Add Route" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="manage-routes__error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading routes..."</p> }
                >
                    <div class="manage-routes__list">
                        {move || {
                            routes
                                .get()
                                .into_iter()
                                .map(|route| {
                                    view! {
                                        <div class="route-row">
                                            <span class="route-row__name">{route.name}</span>
                                            <span class="route-row__stations">
                                                {route.origin} " → " {route.destination}
                                            </span>
                                            <span class="route-row__status">
                                                {if route.active { "Active" } else { "Suspended" }}
                                            </span>
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
