//! Quote composer page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lookup data loads on mount regardless of session. Selecting a port pair or
//! container type re-issues the rate query; responses for superseded
//! selections are dropped by `ComposerState`. A successful create navigates to
//! the quote list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::rate_picker::RatePicker;
use crate::pages::admin::load_lookups;
use crate::state::auth::AuthState;
use crate::state::composer::{ComposerPhase, ComposerState};
use crate::state::forms::parse_selection;
use crate::state::lookups::LookupState;
use crate::state::rates::RateQuery;
use crate::util::auth::session_gate;
use crate::util::format::{container_type_label, port_pair_label};

const LOGIN_PROMPT: &str = "Please log in to create a quote.";

#[component]
pub fn NewQuotePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let lookups = RwSignal::new(LookupState::default());
    let composer = RwSignal::new(ComposerState::default());

    load_lookups(lookups);

    Effect::new(move || {
        if composer.with(ComposerState::is_done) {
            navigate("/quotes", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = composer.try_update(ComposerState::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_quote(&body).await;
            composer.update(|c| c.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    let on_port_pair = move |ev: leptos::ev::Event| {
        let id = parse_selection(&event_target_value(&ev));
        let query = composer.try_update(|c| c.select_port_pair(id)).flatten();
        run_rate_query(composer, query);
    };

    let on_container_type = move |ev: leptos::ev::Event| {
        let id = parse_selection(&event_target_value(&ev));
        let query = composer.try_update(|c| c.select_container_type(id)).flatten();
        run_rate_query(composer, query);
    };

    let gate = move || session_gate(&auth.get(), LOGIN_PROMPT).map(str::to_owned);
    let selected = |id: Option<i64>| id.map(|id| id.to_string()).unwrap_or_default();

    view! {
        <section class="new-quote-page">
            <h2>"New Quote"</h2>
            <Show when=move || lookups.get().error.is_some()>
                <p class="error">{move || lookups.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || gate().is_none()
                fallback=move || view! { <p>{move || gate().unwrap_or_default()}</p> }
            >
                <form class="quote-form" on:submit=on_submit>
                    <label>"Title"</label>
                    <input
                        class="input"
                        type="text"
                        prop:value=move || composer.with(|c| c.form.title.clone())
                        on:input=move |ev| composer.update(|c| c.set_title(event_target_value(&ev)))
                    />
                    <FieldError message=Signal::derive(move || composer.with(|c| c.errors.title))/>

                    <label>"Port Pair"</label>
                    <select
                        class="input"
                        prop:value=move || composer.with(|c| selected(c.form.port_pair_id))
                        on:change=on_port_pair
                    >
                        <option value="">"Choose…"</option>
                        {move || {
                            lookups
                                .get()
                                .port_pairs
                                .into_iter()
                                .map(|pair| {
                                    view! { <option value=pair.id.to_string()>{port_pair_label(&pair)}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <FieldError message=Signal::derive(move || composer.with(|c| c.errors.port_pair_id))/>

                    <label>"Container Type"</label>
                    <select
                        class="input"
                        prop:value=move || composer.with(|c| selected(c.form.container_type_id))
                        on:change=on_container_type
                    >
                        <option value="">"Choose…"</option>
                        {move || {
                            lookups
                                .get()
                                .container_types
                                .into_iter()
                                .map(|ct| {
                                    view! { <option value=ct.id.to_string()>{container_type_label(&ct)}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <FieldError message=Signal::derive(move || composer.with(|c| c.errors.container_type_id))/>

                    <RatePicker composer=composer/>
                    <FieldError message=Signal::derive(move || composer.with(|c| c.errors.rate_ids))/>

                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || composer.with(|c| c.is_busy() || c.is_done())
                    >
                        {move || {
                            if composer.with(|c| matches!(c.phase, ComposerPhase::Submitting)) {
                                "Creating..."
                            } else {
                                "Create Quote"
                            }
                        }}
                    </button>
                    <Show when=move || composer.with(|c| c.failure().is_some())>
                        <p class="error">{move || composer.with(|c| c.failure().unwrap_or_default().to_owned())}</p>
                    </Show>
                </form>
            </Show>
        </section>
    }
}

/// Inline validation message under a form field.
#[component]
fn FieldError(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error">{move || message.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// Fire the rate request for `query` and hand the response back to the
/// composer, which drops it if a newer selection has superseded it.
fn run_rate_query(composer: RwSignal<ComposerState>, query: Option<RateQuery>) {
    let Some(query) = query else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_rates(query.port_pair_id, query.container_type_id)
            .await
            .map(|list| list.items)
            .map_err(|e| e.to_string());
        let applied = composer.try_update(|c| c.apply_rates(&query, result)).unwrap_or(false);
        if !applied {
            log::debug!("dropped stale rate response for generation {}", query.generation);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (composer, query);
}
