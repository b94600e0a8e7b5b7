//! Quote list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/quotes` once per visit and renders whatever the backend exposes to
//! this session. Ownership only decides whether an entry shows an edit link.

use leptos::prelude::*;

use crate::components::quote_summary::QuoteSummary;
use crate::state::auth::AuthState;
use crate::state::quotes::QuotesState;

#[component]
pub fn QuotesListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let quotes = RwSignal::new(QuotesState::default());

    quotes.update(QuotesState::begin);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_quotes().await;
        quotes.update(|q| q.apply(result));
    });

    view! {
        <section class="quotes-page">
            <header class="quotes-page__header">
                <h2>"Quotes"</h2>
                <a class="btn btn--primary" href="/quotes/new">"+ New Quote"</a>
            </header>
            <Show when=move || quotes.get().error.is_some()>
                <p class="error">{move || quotes.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !quotes.get().loading
                fallback=|| view! { <p>"Loading quotes..."</p> }
            >
                <Show
                    when=move || !quotes.get().items.is_empty()
                    fallback=|| view! { <p class="muted">"No quotes yet."</p> }
                >
                    <ul class="quote-list">
                        {move || {
                            let session_user_id = auth.get().user_id();
                            quotes
                                .get()
                                .items
                                .into_iter()
                                .map(|quote| view! { <QuoteSummary quote=quote session_user_id=session_user_id/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
