//! Checkbox list of the rates available for the current selectors.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::composer::ComposerState;
use crate::util::format::rate_label;

#[component]
pub fn RatePicker(composer: RwSignal<ComposerState>) -> impl IntoView {
    let rates = move || composer.with(|c| c.rates.rates.clone());
    let loading = move || composer.with(|c| c.rates.loading);
    let rate_error = move || composer.with(|c| c.rates.error.clone());
    let ready = move || composer.with(|c| c.form.port_pair_id.is_some() && c.form.container_type_id.is_some());

    view! {
        <fieldset class="rate-picker">
            <legend>"Rates"</legend>
            {move || {
                if !ready() {
                    view! { <p class="muted">"Choose a port pair and container type to see rates."</p> }
                        .into_any()
                } else if loading() {
                    view! { <p class="muted">"Loading rates…"</p> }.into_any()
                } else if let Some(message) = rate_error() {
                    view! { <p class="error">{message}</p> }.into_any()
                } else if rates().is_empty() {
                    view! { <p class="muted">"No rates for this selection."</p> }.into_any()
                } else {
                    rates()
                        .into_iter()
                        .map(|rate| {
                            let id = rate.id;
                            view! {
                                <label class="rate-picker__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || composer.with(|c| c.is_selected(id))
                                        on:change=move |_| composer.update(|c| c.toggle_rate(id))
                                    />
                                    {rate_label(&rate)}
                                </label>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </fieldset>
    }
}
