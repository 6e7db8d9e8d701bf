//! Placeholder page for admin areas that are not built yet.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn ComingSoonPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <section class="coming-soon">
                <h1>{title}</h1>
                <p>"This area is under construction. Check back soon."</p>
            </section>
        </div>
    }
}
