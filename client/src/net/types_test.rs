use super::*;

// =============================================================
// Decoding
// =============================================================

#[test]
fn user_decodes_and_ignores_extra_fields() {
    let user: User =
        serde_json::from_value(serde_json::json!({ "id": 9, "email": "a@b.com", "_password_hash": "x" })).unwrap();
    assert_eq!(user, User { id: 9, email: "a@b.com".to_owned() });
}

#[test]
fn user_id_accepts_integral_float() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 9.0, "email": "a@b.com" })).unwrap();
    assert_eq!(user.id, 9);
}

#[test]
fn user_id_rejects_string() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "id": "9", "email": "a@b.com" }));
    assert!(result.is_err());
}

#[test]
fn port_pair_decodes_embedded_ports() {
    let pair: PortPair = serde_json::from_value(serde_json::json!({
        "id": 3,
        "origin_port": { "id": 1, "name": "Shanghai", "code": "CNSHA" },
        "destination_port": { "name": "Rotterdam", "code": "NLRTM" },
        "origin_port_id": 1,
        "destination_port_id": 2
    }))
    .unwrap();
    assert_eq!(
        pair.origin_port,
        Some(PortRef::Summary(PortSummary {
            id: Some(1),
            name: Some("Shanghai".to_owned()),
            code: Some("CNSHA".to_owned()),
        }))
    );
    assert_eq!(pair.destination_port_id, Some(2));
}

#[test]
fn port_pair_decodes_raw_foreign_keys() {
    let pair: PortPair =
        serde_json::from_value(serde_json::json!({ "id": 3, "origin_port": 1, "destination_port": 2 })).unwrap();
    assert_eq!(pair.origin_port, Some(PortRef::Id(1)));
    assert_eq!(pair.destination_port, Some(PortRef::Id(2)));
}

#[test]
fn quote_with_nested_rates_decodes_without_rate_foreign_keys() {
    let quote: Quote = serde_json::from_value(serde_json::json!({
        "id": 5,
        "title": "X",
        "status": "Accepted",
        "user_id": 9,
        "rates": [{ "id": 1, "base_rate": 500, "transit_days": 12 }]
    }))
    .unwrap();
    assert_eq!(quote.user_id, Some(9));
    assert_eq!(quote.rates.len(), 1);
    assert_eq!(quote.rates[0].port_pair_id, None);
    assert!((quote.rates[0].base_rate - 500.0).abs() < f64::EPSILON);
    assert_eq!(quote.rates[0].transit_days, 12);
}

#[test]
fn quote_null_status_reads_as_empty() {
    let quote: Quote = serde_json::from_value(serde_json::json!({
        "id": 1, "title": "T", "status": null, "user_id": 9, "rates": []
    }))
    .unwrap();
    assert_eq!(quote.status, "");
    assert_eq!(quote.user_id, Some(9));
}

#[test]
fn quote_status_rejects_non_string() {
    let result = serde_json::from_value::<Quote>(serde_json::json!({ "id": 1, "title": "T", "status": 3 }));
    assert!(result.is_err());
}

#[test]
fn quote_summary_defaults_missing_status_and_rates() {
    let quote: Quote = serde_json::from_value(serde_json::json!({ "id": 1, "title": "Bare" })).unwrap();
    assert_eq!(quote.status, "");
    assert!(quote.rates.is_empty());
    assert_eq!(quote.user_id, None);
}

#[test]
fn container_type_description_is_optional() {
    let ct: ContainerType = serde_json::from_value(serde_json::json!({ "id": 2, "code": "40HC" })).unwrap();
    assert_eq!(ct.description, None);
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn quote_patch_skips_unchanged_fields() {
    let patch = QuotePatch { title: None, status: Some("Accepted".to_owned()) };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "status": "Accepted" }));
    assert!(!patch.is_empty());
    assert!(QuotePatch::default().is_empty());
}

#[test]
fn new_quote_serializes_title_and_rate_ids() {
    let body = NewQuote { title: "Acme".to_owned(), rate_ids: vec![7, 8] };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "title": "Acme", "rate_ids": [7, 8] }));
}

#[test]
fn new_container_type_omits_missing_description() {
    let body = NewContainerType { code: "20GP".to_owned(), description: None };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "code": "20GP" }));
}
