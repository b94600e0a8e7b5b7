//! List entry for one quote.
//!
//! DESIGN
//! ======
//! The edit link is only rendered for the owner; everyone else can still open
//! the read-only view through the title.

use leptos::prelude::*;

use crate::components::booking_link::BookingLink;
use crate::net::types::Quote;
use crate::util::auth::is_owner;

#[component]
pub fn QuoteSummary(quote: Quote, session_user_id: Option<i64>) -> impl IntoView {
    let href = format!("/quotes/{}", quote.id);
    let edit_href = href.clone();
    let owned = is_owner(session_user_id, quote.user_id);
    let status = if quote.status.is_empty() { "—".to_owned() } else { quote.status.clone() };

    view! {
        <li class="quote-summary">
            <a class="quote-summary__title" href=href>{quote.title.clone()}</a>
            <span class="quote-summary__status">{status}</span>
            <Show when=move || owned>
                <a class="quote-summary__edit" href=edit_href.clone()>"Edit"</a>
            </Show>
            <BookingLink quote_id=quote.id title=quote.title.clone() status=quote.status.clone()/>
        </li>
    }
}
