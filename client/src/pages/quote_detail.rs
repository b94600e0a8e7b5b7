//! Quote detail page with owner-only edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `:id` from the route and loads the quote once per id. Everyone gets
//! the read-only view; the edit form and delete control render only when the
//! session user owns the quote.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::booking_link::BookingLink;
use crate::state::auth::AuthState;
use crate::state::quote::{QuoteDetailState, QuoteLoad, parse_quote_id, status_options};
use crate::util::format::rate_label;

#[component]
pub fn QuoteDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let detail = RwSignal::new(QuoteDetailState::default());
    let deleted = RwSignal::new(false);

    let route_id = move || params.read().get("id").and_then(|raw| parse_quote_id(&raw));

    Effect::new(move || {
        let id = route_id();
        detail.set(QuoteDetailState::default());
        let Some(id) = id else {
            detail.update(|d| d.load = QuoteLoad::NotFound);
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_quote(id).await;
            let still_current = params.read_untracked().get("id").and_then(|raw| parse_quote_id(&raw)) == Some(id);
            if still_current {
                detail.update(|d| d.load_finished(result));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    Effect::new(move || {
        if deleted.get() {
            navigate("/quotes", NavigateOptions::default());
        }
    });

    // Memos keep the body from re-rendering on every keystroke in the edit form.
    let quote = Memo::new(move |_| detail.with(|d| d.quote().cloned()));
    let can_manage = Memo::new(move |_| detail.with(|d| d.can_manage(auth.with(AuthState::user_id))));

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = detail.with_untracked(|d| d.quote().map(|q| q.id)) else {
            return;
        };
        let user_id = auth.with_untracked(AuthState::user_id);
        let Some(patch) = detail.try_update(|d| d.begin_save(user_id)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_quote(id, &patch).await;
            detail.update(|d| d.save_finished(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, patch);
    };

    let on_delete = move |_| {
        let user_id = auth.with_untracked(AuthState::user_id);
        let Some(id) = detail.try_update(|d| d.begin_delete(user_id)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_quote(id).await;
            if detail.try_update(|d| d.delete_finished(result)).unwrap_or(false) {
                deleted.set(true);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <section class="quote-detail-page">
            <Show when=move || detail.with(|d| d.load.message().is_some())>
                <p class="notice">{move || detail.with(|d| d.load.message().unwrap_or_default().to_owned())}</p>
            </Show>
            {move || {
                quote
                    .get()
                    .map(|quote| {
                        let rates = quote
                            .rates
                            .iter()
                            .map(|rate| view! { <li>{rate_label(rate)}</li> })
                            .collect::<Vec<_>>();
                        view! {
                            <h2>{format!("Quote #{}", quote.id)}</h2>
                            <Show when=move || !can_manage.get()>
                                <p class="muted">"(Read-only)"</p>
                            </Show>
                            <p>
                                <strong>"Title: "</strong>
                                {quote.title.clone()}
                            </p>
                            <p>
                                <strong>"Status: "</strong>
                                {quote.status.clone()}
                            </p>
                            <BookingLink quote_id=quote.id title=quote.title.clone() status=quote.status.clone()/>
                            <h3>"Selected Rates"</h3>
                            <ul class="rate-list">{rates}</ul>
                        }
                    })
            }}
            <Show when=move || can_manage.get()>
                <h3>"Edit"</h3>
                <form class="quote-form" on:submit=on_save>
                    <label>"Title"</label>
                    <input
                        class="input"
                        type="text"
                        prop:value=move || detail.with(|d| d.form.title.clone())
                        on:input=move |ev| detail.update(|d| d.form.title = event_target_value(&ev))
                    />
                    <label>"Status"</label>
                    <input
                        class="input"
                        type="text"
                        list="quote-status-options"
                        prop:value=move || detail.with(|d| d.form.status.clone())
                        on:input=move |ev| detail.update(|d| d.form.status = event_target_value(&ev))
                    />
                    <datalist id="quote-status-options">
                        {move || {
                            quote
                                .get()
                                .map(|q| status_options(&q.status))
                                .unwrap_or_default()
                                .into_iter()
                                .map(|status| view! { <option value=status></option> })
                                .collect::<Vec<_>>()
                        }}
                    </datalist>
                    <button class="btn btn--primary" type="submit" disabled=move || detail.with(|d| d.saving)>
                        {move || if detail.with(|d| d.saving) { "Saving..." } else { "Save" }}
                    </button>
                </form>
                <button
                    class="btn btn--danger quote-detail-page__delete"
                    disabled=move || detail.with(|d| d.deleting)
                    on:click=on_delete
                >
                    {move || if detail.with(|d| d.deleting) { "Deleting..." } else { "Delete" }}
                </button>
            </Show>
            <Show when=move || detail.with(|d| d.notice.is_some())>
                <p class="notice">{move || detail.with(|d| d.notice.clone().unwrap_or_default())}</p>
            </Show>
        </section>
    }
}
