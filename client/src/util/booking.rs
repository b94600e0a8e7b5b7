//! Mail-based booking shortcut for accepted quotes.
//!
//! The link opens the user's mail client; nothing is sent over the network.
//! Subject and body depend only on the quote id and title.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::config::BOOKING_CONTACT;

/// Whether a status string denotes an accepted quote.
pub fn is_accepted(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case("accepted")
}

pub fn booking_subject(quote_id: i64) -> String {
    format!("Booking request for quote #{quote_id}")
}

pub fn booking_body(quote_id: i64, title: &str) -> String {
    format!("Hello,\n\nPlease book accepted quote #{quote_id} \"{title}\".\n\nThank you.")
}

/// `mailto:` URL addressed to the booking desk.
pub fn booking_mailto(quote_id: i64, title: &str) -> String {
    format!(
        "mailto:{BOOKING_CONTACT}?subject={}&body={}",
        urlencoding::encode(&booking_subject(quote_id)),
        urlencoding::encode(&booking_body(quote_id, title))
    )
}
