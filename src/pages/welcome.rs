//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="welcome-page">
            <section class="welcome-hero">
                <h1>"RideMumbai"</h1>
                <p class="welcome-hero__tagline">
                    "Plan routes, book tickets, and top up your wallet for the Mumbai metro."
                </p>
                <div class="welcome-hero__actions">
                    <a class="btn btn--primary" href="/login">
                        "Sign In"
                    </a>
                    <a class="btn" href="/register">
                        "Create Account"
                    </a>
                </div>
            </section>
            <section class="welcome-features">
                <div class="welcome-feature">
                    <h2>"Route Planning"</h2>
                    <p>"Compare lines, transfers, and travel times across the network."</p>
                </div>
                <div class="welcome-feature">
                    <h2>"Instant Booking"</h2>
                    <p>"Book single or return tickets straight from your wallet."</p>
                </div>
                <div class="welcome-feature">
                    <h2>"Travel History"</h2>
                    <p>"Every journey and fare, in one place."</p>
                </div>
            </section>
        </div>
    }
}
