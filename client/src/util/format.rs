//! Display labels for lookup records.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{ContainerType, PortPair, PortRef, Rate};

/// `"Shanghai → Rotterdam"`, falling back to codes or `#id` for sparse pairs.
pub fn port_pair_label(pair: &PortPair) -> String {
    format!(
        "{} → {}",
        port_side_label(pair.origin_port.as_ref(), pair.origin_port_id),
        port_side_label(pair.destination_port.as_ref(), pair.destination_port_id)
    )
}

fn port_side_label(side: Option<&PortRef>, fallback_id: Option<i64>) -> String {
    match side {
        Some(PortRef::Summary(summary)) => summary
            .name
            .clone()
            .or_else(|| summary.code.clone())
            .or_else(|| summary.id.or(fallback_id).map(|id| format!("#{id}")))
            .unwrap_or_else(|| "?".to_owned()),
        Some(PortRef::Id(id)) => format!("#{id}"),
        None => fallback_id.map_or_else(|| "?".to_owned(), |id| format!("#{id}")),
    }
}

pub fn container_type_label(container_type: &ContainerType) -> String {
    match container_type.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => format!("{} ({description})", container_type.code),
        _ => container_type.code.clone(),
    }
}

/// Whole amounts drop the decimals: `$500`, `$512.50`.
pub fn money(amount: f64) -> String {
    if amount.fract() == 0.0 { format!("${amount:.0}") } else { format!("${amount:.2}") }
}

pub fn rate_label(rate: &Rate) -> String {
    let unit = if rate.transit_days == 1 { "day" } else { "days" };
    format!("{} · {} {unit}", money(rate.base_rate), rate.transit_days)
}
