//! Catch-all 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"That stop doesn't exist on our map."</p>
            <a class="btn" href="/">
                "Back to Home"
            </a>
        </div>
    }
}
