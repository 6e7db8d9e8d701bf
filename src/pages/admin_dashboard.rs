//! Admin dashboard showing system metrics at a glance.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::AdminStats;
use crate::util::format::format_inr;

#[cfg(any(test, feature = "hydrate"))]
fn stats_failed_message(status: u16) -> String {
    format!("Stats request failed (status {status})")
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = RwSignal::new(None::<AdminStats>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let config = crate::net::http::RequestConfig::get();
        match crate::net::http::authenticated_fetch("/admin/stats", config).await {
            Ok(resp) if resp.ok() => match resp.json::<AdminStats>().await {
                Ok(body) => stats.set(Some(body)),
                Err(e) => error.set(e.to_string()),
            },
            Ok(resp) => error.set(stats_failed_message(resp.status())),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    view! {
        <div class="page">
            <Navbar/>
            <section class="admin-dashboard">
                <h1>"System Overview"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="admin-dashboard__error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading metrics..."</p> }
                >
                    {move || {
                        stats
                            .get()
                            .map(|s| {
                                view! {
                                    <div class="admin-dashboard__tiles">
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{s.active_routes}</span>
                                            <span class="stat-tile__label">"Active Routes"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{s.daily_ridership}</span>
                                            <span class="stat-tile__label">"Riders Today"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{format_inr(s.revenue_today)}</span>
                                            <span class="stat-tile__label">"Revenue Today"</span>
                                        </div>
                                        <div class="stat-tile">
                                            <span class="stat-tile__value">{s.open_alerts}</span>
                                            <span class="stat-tile__label">"Open Alerts"</span>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </section>
        </div>
    }
}
