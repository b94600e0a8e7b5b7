//! Admin page for creating lookup data and users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated on the session. Each create form keeps its own `FormStatus`; a
//! successful create clears the form and reloads the lookups so the
//! selectors further down pick up the new record.

use leptos::prelude::*;

use crate::net::types::{ContainerType, Port, PortPair};
use crate::pages::login::validate_credentials;
use crate::state::auth::AuthState;
use crate::state::forms::{
    FormStatus, RateDraft, parse_selection, validate_container_type, validate_port, validate_port_pair,
};
use crate::state::lookups::LookupState;
use crate::util::auth::session_gate;
use crate::util::format::{container_type_label, port_pair_label};

const LOGIN_PROMPT: &str = "Please log in to manage lookup data.";

/// Load ports, port pairs and container types in parallel into `lookups`.
/// Only the most recently started load is applied.
pub(crate) fn load_lookups(lookups: RwSignal<LookupState>) {
    let Some(ticket) = lookups.try_update(LookupState::begin) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;
        let (ports, port_pairs, container_types) =
            futures::join!(api::fetch_ports(), api::fetch_port_pairs(), api::fetch_container_types());
        let applied = lookups.try_update(|l| l.apply(ticket, ports, port_pairs, container_types)).unwrap_or(false);
        if !applied {
            log::debug!("dropped superseded lookup load {ticket}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lookups = RwSignal::new(LookupState::default());

    // Lookups wait for a confirmed session.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let signed_in = auth.with(AuthState::is_signed_in);
        if signed_in && !requested.get_untracked() {
            requested.set(true);
            load_lookups(lookups);
        }
    });

    let gate = move || session_gate(&auth.get(), LOGIN_PROMPT).map(str::to_owned);

    view! {
        <Show
            when=move || gate().is_none()
            fallback=move || view! { <p>{move || gate().unwrap_or_default()}</p> }
        >
            <section class="admin-page">
                <h2>"Admin: Lookup Data"</h2>
                <Show when=move || lookups.with(|l| l.error.is_some())>
                    <p class="error">{move || lookups.with(|l| l.error.clone().unwrap_or_default())}</p>
                </Show>
                <PortForm lookups=lookups/>
                <ContainerTypeForm lookups=lookups/>
                <PortPairForm lookups=lookups/>
                <RateForm lookups=lookups/>
                <UserForm/>
            </section>
        </Show>
    }
}

#[component]
fn StatusLine(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <Show when=move || status.with(|s| s.message.is_some())>
            <p class=move || if status.with(|s| s.succeeded) { "ok" } else { "error" }>
                {move || status.with(|s| s.message.clone().unwrap_or_default())}
            </p>
        </Show>
    }
}

fn port_options(ports: Vec<Port>) -> impl IntoView {
    ports
        .into_iter()
        .map(|port| view! { <option value=port.id.to_string()>{format!("{} ({})", port.name, port.code)}</option> })
        .collect::<Vec<_>>()
}

fn port_pair_options(pairs: Vec<PortPair>) -> impl IntoView {
    pairs
        .into_iter()
        .map(|pair| view! { <option value=pair.id.to_string()>{port_pair_label(&pair)}</option> })
        .collect::<Vec<_>>()
}

fn container_type_options(types: Vec<ContainerType>) -> impl IntoView {
    types
        .into_iter()
        .map(|ct| view! { <option value=ct.id.to_string()>{container_type_label(&ct)}</option> })
        .collect::<Vec<_>>()
}

#[component]
fn PortForm(lookups: RwSignal<LookupState>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match validate_port(&name.get_untracked(), &code.get_untracked()) {
            Ok(body) => body,
            Err(message) => {
                status.update(|s| s.invalid(message));
                return;
            }
        };
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_port(&body).await;
            if status.try_update(|s| s.finish(&result)).unwrap_or(false) {
                name.set(String::new());
                code.set(String::new());
                load_lookups(lookups);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, lookups);
    };

    view! {
        <section class="card">
            <h3>"Create Port"</h3>
            <form on:submit=on_submit>
                <label>"Name"</label>
                <input class="input" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                <label>"Code (UN/LOCODE)"</label>
                <input
                    class="input"
                    maxlength="5"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev).to_ascii_uppercase())
                />
                <button class="btn" type="submit" disabled=move || status.with(|s| s.submitting)>
                    "Create Port"
                </button>
                <StatusLine status=status/>
            </form>
        </section>
    }
}

#[component]
fn ContainerTypeForm(lookups: RwSignal<LookupState>) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match validate_container_type(&code.get_untracked(), &description.get_untracked()) {
            Ok(body) => body,
            Err(message) => {
                status.update(|s| s.invalid(message));
                return;
            }
        };
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_container_type(&body).await;
            if status.try_update(|s| s.finish(&result)).unwrap_or(false) {
                code.set(String::new());
                description.set(String::new());
                load_lookups(lookups);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (body, lookups);
    };

    view! {
        <section class="card">
            <h3>"Create Container Type"</h3>
            <form on:submit=on_submit>
                <label>"Code"</label>
                <input class="input" prop:value=move || code.get() on:input=move |ev| code.set(event_target_value(&ev))/>
                <label>"Description"</label>
                <input
                    class="input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || status.with(|s| s.submitting)>
                    "Create Type"
                </button>
                <StatusLine status=status/>
            </form>
        </section>
    }
}

#[component]
fn PortPairForm(lookups: RwSignal<LookupState>) -> impl IntoView {
    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match validate_port_pair(
            parse_selection(&origin.get_untracked()),
            parse_selection(&destination.get_untracked()),
        ) {
            Ok(body) => body,
            Err(message) => {
                status.update(|s| s.invalid(message));
                return;
            }
        };
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_port_pair(&body).await;
            if status.try_update(|s| s.finish(&result)).unwrap_or(false) {
                origin.set(String::new());
                destination.set(String::new());
                load_lookups(lookups);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    view! {
        <section class="card">
            <h3>"Create Port Pair"</h3>
            <form on:submit=on_submit>
                <label>"Origin"</label>
                <select class="input" prop:value=move || origin.get() on:change=move |ev| origin.set(event_target_value(&ev))>
                    <option value="">"Choose…"</option>
                    {move || port_options(lookups.with(|l| l.ports.clone()))}
                </select>
                <label>"Destination"</label>
                <select
                    class="input"
                    prop:value=move || destination.get()
                    on:change=move |ev| destination.set(event_target_value(&ev))
                >
                    <option value="">"Choose…"</option>
                    {move || port_options(lookups.with(|l| l.ports.clone()))}
                </select>
                <button class="btn" type="submit" disabled=move || status.with(|s| s.submitting)>
                    "Create Pair"
                </button>
                <StatusLine status=status/>
            </form>
        </section>
    }
}

#[component]
fn RateForm(lookups: RwSignal<LookupState>) -> impl IntoView {
    let draft = RwSignal::new(RateDraft::default());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match draft.with_untracked(RateDraft::validate) {
            Ok(body) => body,
            Err(message) => {
                status.update(|s| s.invalid(message));
                return;
            }
        };
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_rate(&body).await;
            if status.try_update(|s| s.finish(&result)).unwrap_or(false) {
                draft.update(RateDraft::clear);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = body;
    };

    view! {
        <section class="card">
            <h3>"Create Rate"</h3>
            <form on:submit=on_submit>
                <label>"Port Pair"</label>
                <select
                    class="input"
                    prop:value=move || draft.with(|d| d.port_pair.clone())
                    on:change=move |ev| draft.update(|d| d.port_pair = event_target_value(&ev))
                >
                    <option value="">"Choose…"</option>
                    {move || port_pair_options(lookups.with(|l| l.port_pairs.clone()))}
                </select>
                <label>"Container Type"</label>
                <select
                    class="input"
                    prop:value=move || draft.with(|d| d.container_type.clone())
                    on:change=move |ev| draft.update(|d| d.container_type = event_target_value(&ev))
                >
                    <option value="">"Choose…"</option>
                    {move || container_type_options(lookups.with(|l| l.container_types.clone()))}
                </select>
                <label>"Transit Days"</label>
                <input
                    class="input"
                    type="number"
                    min="1"
                    step="1"
                    prop:value=move || draft.with(|d| d.transit_days.clone())
                    on:input=move |ev| draft.update(|d| d.transit_days = event_target_value(&ev))
                />
                <label>"Base Rate (USD)"</label>
                <input
                    class="input"
                    type="number"
                    min="1"
                    step="0.01"
                    prop:value=move || draft.with(|d| d.base_rate.clone())
                    on:input=move |ev| draft.update(|d| d.base_rate = event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || status.with(|s| s.submitting)>
                    "Create Rate"
                </button>
                <StatusLine status=status/>
            </form>
        </section>
    }
}

#[component]
fn UserForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                status.update(|s| s.invalid(message));
                return;
            }
        };
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_user(&credentials).await;
            if status.try_update(|s| s.finish(&result)).unwrap_or(false) {
                email.set(String::new());
                password.set(String::new());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <section class="card">
            <h3>"Create User"</h3>
            <form on:submit=on_submit>
                <label>"Email"</label>
                <input
                    class="input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label>"Password"</label>
                <input
                    class="input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || status.with(|s| s.submitting)>
                    "Create User"
                </button>
                <StatusLine status=status/>
            </form>
        </section>
    }
}
