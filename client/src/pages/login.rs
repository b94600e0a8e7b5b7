//! Login page with email + password sign-in and account signup.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::AuthState;

pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn pending_text(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Signup => "Creating account...",
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Signup => "Signup failed",
        }
    }
}

/// Loose shape check: exactly one `@` with text on both sides.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
}

/// Trim and check login/signup input before it reaches the backend.
///
/// # Errors
///
/// Returns the inline message for an invalid email or a short password.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err("Use a valid email.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 4 characters.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            navigate("/quotes", NavigateOptions::default());
        }
    });

    let submit = move |mode: AuthMode| {
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(mode.pending_text().to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match mode {
                AuthMode::Login => crate::net::api::login(&credentials).await,
                AuthMode::Signup => crate::net::api::signup(&credentials).await,
            };
            match result {
                Ok(user) => {
                    auth.update(|a| a.sign_in(user));
                    info.set(String::new());
                    signed_in.set(true);
                }
                Err(e) => info.set(format!("{}: {e}", mode.failure_prefix())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    let current_email = move || auth.get().user.map(|u| u.email);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <Show when=move || current_email().is_some()>
                    <p class="login-message">
                        "Signed in as "
                        <strong>{move || current_email().unwrap_or_default()}</strong>
                    </p>
                </Show>
                <form
                    class="login-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit(AuthMode::Login);
                    }
                >
                    <label>"Email"</label>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label>"Password"</label>
                    <input
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                    <button
                        class="login-button login-button--secondary"
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| submit(AuthMode::Signup)
                    >
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
