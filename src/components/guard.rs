//! Route guard components wrapping page views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin reactive shells over [`crate::util::auth::decide`]: they re-evaluate
//! the access decision on every session change, render a neutral indicator
//! while the startup check is in flight, and navigate away when the decision
//! says so. The wrapped view is never rendered before the check completes.

use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::{RouteAccess, RouteDecision, decide};

/// Wrap a view that requires an authenticated session. With `admin_only`,
/// the administrator role is required; otherwise the route is commuter-only
/// and administrators are sent to their own home.
#[component]
pub fn Protected(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let access = if admin_only { RouteAccess::Admin } else { RouteAccess::Commuter };
    guarded(access, children)
}

/// Wrap a view only unauthenticated visitors may see (welcome, login,
/// register). Authenticated users are sent to their role home.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    guarded(RouteAccess::PublicOnly, children)
}

fn guarded(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    let navigate = use_navigate();
    Effect::new(move || {
        if let RouteDecision::Redirect(path) = decide(&session.snapshot(), access) {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        {move || match decide(&session.snapshot(), access) {
            RouteDecision::Render => children().into_any(),
            RouteDecision::Loading => {
                view! {
                    <div class="guard-screen">
                        <p>"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
            RouteDecision::Redirect(_) => {
                view! {
                    <div class="guard-screen">
                        <p>"Redirecting..."</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
