//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-card">
            <h1>"Freight Quotes"</h1>
            <p>"Compare routes and container rates, then lock in a quote."</p>
            <div class="home-cta">
                <a class="btn" href="/login">"Login"</a>
                <a class="btn btn--secondary" href="/quotes">"View Quotes"</a>
            </div>
        </section>
    }
}
