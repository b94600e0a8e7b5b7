//! Top bar with primary navigation, session identity and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the routes so every page shares the same navigation
//! and the same logout behavior.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Site-wide navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    // Local state clears immediately; the remote outcome is ignored and the
    // request is bounded by the API timeout.
    let on_logout = move |_| {
        auth.update(AuthState::sign_out);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Freight Quotes"</a>
            <a class="nav-bar__link" href="/quotes">"Quotes"</a>
            <a class="nav-bar__link" href="/quotes/new">"New Quote"</a>
            <a class="nav-bar__link" href="/admin">"Admin"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| view! { <a class="nav-bar__link" href="/login">"Login"</a> }
            >
                <span class="nav-bar__self">{email}</span>
                <button class="btn nav-bar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
