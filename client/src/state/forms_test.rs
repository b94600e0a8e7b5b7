use super::*;

// =============================================================
// FormStatus
// =============================================================

#[test]
fn begin_refuses_double_submit() {
    let mut status = FormStatus::default();
    assert!(status.begin());
    assert!(!status.begin());
}

#[test]
fn finish_success_reports_created() {
    let mut status = FormStatus::default();
    status.begin();
    assert!(status.finish(&Ok::<(), ApiError>(())));
    assert_eq!(status.message.as_deref(), Some(CREATED));
    assert!(status.succeeded);
    assert!(!status.submitting);
}

#[test]
fn finish_failure_reports_backend_message() {
    let mut status = FormStatus::default();
    status.begin();
    let result: Result<(), ApiError> = Err(ApiError::Status { status: 400, message: "code taken".to_owned() });
    assert!(!status.finish(&result));
    assert_eq!(status.message.as_deref(), Some("code taken"));
    assert!(!status.succeeded);
}

// =============================================================
// Validators
// =============================================================

#[test]
fn validate_port_uppercases_code() {
    assert_eq!(
        validate_port(" Rotterdam ", " nlrtm "),
        Ok(NewPort { name: "Rotterdam".to_owned(), code: "NLRTM".to_owned() })
    );
}

#[test]
fn validate_port_rejects_bad_code_length() {
    assert_eq!(validate_port("Rotterdam", "NLRT"), Err("5-char UN/LOCODE expected."));
    assert_eq!(validate_port("Rotterdam", "NLRTMX"), Err("5-char UN/LOCODE expected."));
    assert_eq!(validate_port("Rotterdam", "NL-RT"), Err("5-char UN/LOCODE expected."));
}

#[test]
fn validate_port_requires_name() {
    assert_eq!(validate_port("  ", "NLRTM"), Err("Port name is required."));
}

#[test]
fn validate_container_type_drops_blank_description() {
    assert_eq!(
        validate_container_type(" 40HC ", "  "),
        Ok(NewContainerType { code: "40HC".to_owned(), description: None })
    );
    assert_eq!(validate_container_type("", "High cube"), Err("Container code is required."));
}

#[test]
fn validate_port_pair_requires_both_sides() {
    assert_eq!(validate_port_pair(Some(1), Some(2)), Ok(NewPortPair { origin_port_id: 1, destination_port_id: 2 }));
    assert!(validate_port_pair(Some(1), None).is_err());
}

#[test]
fn validate_rate_enforces_minimums() {
    assert_eq!(
        validate_rate(Some(1), Some(2), "12", "500.5"),
        Ok(NewRate { port_pair_id: 1, container_type_id: 2, transit_days: 12, base_rate: 500.5 })
    );
    assert_eq!(
        validate_rate(Some(1), Some(2), "0", "500"),
        Err("Transit days must be a whole number of at least 1.")
    );
    assert_eq!(
        validate_rate(Some(1), Some(2), "2.5", "500"),
        Err("Transit days must be a whole number of at least 1.")
    );
    assert_eq!(validate_rate(Some(1), Some(2), "3", "0.5"), Err("Base rate must be at least 1."));
    assert_eq!(validate_rate(None, Some(2), "3", "5"), Err("Choose a port pair and a container type."));
}

#[test]
fn parse_selection_maps_placeholder_to_none() {
    assert_eq!(parse_selection(""), None);
    assert_eq!(parse_selection("7"), Some(7));
}

#[test]
fn rate_draft_validates_raw_input() {
    let draft = RateDraft {
        port_pair: "3".to_owned(),
        container_type: "4".to_owned(),
        transit_days: "12".to_owned(),
        base_rate: "500".to_owned(),
    };
    let body = draft.validate().unwrap();
    assert_eq!((body.port_pair_id, body.container_type_id, body.transit_days), (3, 4, 12));
}

#[test]
fn rate_draft_clear_resets_selectors_too() {
    let mut draft = RateDraft {
        port_pair: "3".to_owned(),
        container_type: "4".to_owned(),
        transit_days: "12".to_owned(),
        base_rate: "500".to_owned(),
    };
    let mut status = FormStatus::default();
    assert!(status.begin());
    if status.finish(&Ok::<(), ApiError>(())) {
        draft.clear();
    }
    assert_eq!(draft, RateDraft::default());
    assert_eq!(draft.validate(), Err("Choose a port pair and a container type."));
}
