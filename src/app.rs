//! Application root: session context, startup credential check, and the
//! route table with its guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one [`Session`] handle for the whole process and provides
//! it via context before any route renders. The startup check runs exactly
//! once here; guards observe `loading=true` for its entire duration, so no
//! protected view can flash before the stored credential is verified.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::coming_soon::ComingSoonPage;
use crate::components::guard::{Protected, PublicOnly};
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_routes::ManageRoutesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::history::TravelHistoryPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::route_planning::RoutePlanningPage;
use crate::pages::tickets::TicketBookingPage;
use crate::pages::welcome::WelcomePage;
use crate::state::session::Session;

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    // One startup check per process; `loading` stays true until it finishes.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.init_from_storage().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ridemumbai.css"/>
        <Title text="RideMumbai"/>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    // Public routes
                    <Route
                        path=path!("/")
                        view=|| view! { <PublicOnly><WelcomePage/></PublicOnly> }
                    />
                    <Route
                        path=path!("/login")
                        view=|| view! { <PublicOnly><LoginPage/></PublicOnly> }
                    />
                    <Route
                        path=path!("/register")
                        view=|| view! { <PublicOnly><RegisterPage/></PublicOnly> }
                    />

                    // Commuter routes
                    <Route
                        path=path!("/commuter-dashboard")
                        view=|| view! { <Protected><DashboardPage/></Protected> }
                    />
                    <Route
                        path=path!("/route-planning")
                        view=|| view! { <Protected><RoutePlanningPage/></Protected> }
                    />
                    <Route
                        path=path!("/booking")
                        view=|| view! { <Protected><TicketBookingPage/></Protected> }
                    />
                    <Route
                        path=path!("/history")
                        view=|| view! { <Protected><TravelHistoryPage/></Protected> }
                    />
                    <Route
                        path=path!("/profile")
                        view=|| view! { <Protected><ProfilePage/></Protected> }
                    />

                    // Admin routes
                    <Route
                        path=path!("/admin/dashboard")
                        view=|| view! { <Protected admin_only=true><AdminDashboardPage/></Protected> }
                    />
                    <Route
                        path=path!("/admin/routes")
                        view=|| view! { <Protected admin_only=true><ManageRoutesPage/></Protected> }
                    />
                    <Route
                        path=path!("/admin/schedules")
                        view=|| {
                            view! {
                                <Protected admin_only=true>
                                    <ComingSoonPage title="Manage Schedules"/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/users")
                        view=|| {
                            view! {
                                <Protected admin_only=true>
                                    <ComingSoonPage title="User Management"/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/notifications")
                        view=|| {
                            view! {
                                <Protected admin_only=true>
                                    <ComingSoonPage title="Notifications"/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
