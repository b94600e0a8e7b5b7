//! `mailto:` booking shortcut shown on accepted quotes.

use leptos::prelude::*;

use crate::util::booking::{booking_mailto, is_accepted};

/// Renders nothing unless `status` denotes acceptance.
#[component]
pub fn BookingLink(quote_id: i64, title: String, status: String) -> impl IntoView {
    let accepted = is_accepted(&status);
    let href = booking_mailto(quote_id, &title);
    view! {
        <Show when=move || accepted>
            <a class="btn booking-link" href=href.clone()>
                "Book by email"
            </a>
        </Show>
    }
}
