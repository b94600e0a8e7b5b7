use super::*;

fn rate(id: i64) -> Rate {
    Rate { id, port_pair_id: Some(1), container_type_id: Some(2), transit_days: 10, base_rate: 900.0 }
}

/// Composer with pair 1 / type 2 selected and rates `ids` displayed.
fn composer_with_rates(ids: &[i64]) -> ComposerState {
    let mut state = ComposerState::default();
    state.select_port_pair(Some(1));
    let query = state.select_container_type(Some(2)).unwrap();
    state.apply_rates(&query, Ok(ids.iter().copied().map(rate).collect()));
    state
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_whitespace_title_and_empty_selection() {
    let form = ComposerForm { title: "   ".to_owned(), port_pair_id: Some(1), container_type_id: Some(2), ..Default::default() };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.title, Some(REQUIRED));
    assert_eq!(errors.rate_ids, Some(CHOOSE_RATE));
    assert_eq!(errors.port_pair_id, None);
}

#[test]
fn validate_requires_both_selectors() {
    let form = ComposerForm { title: "Acme".to_owned(), rate_ids: BTreeSet::from([7]), ..Default::default() };
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.port_pair_id, Some(REQUIRED));
    assert_eq!(errors.container_type_id, Some(REQUIRED));
}

#[test]
fn validate_trims_title_and_sorts_rate_ids() {
    let form = ComposerForm {
        title: "  Acme  ".to_owned(),
        port_pair_id: Some(1),
        container_type_id: Some(2),
        rate_ids: BTreeSet::from([9, 7]),
    };
    assert_eq!(validate(&form), Ok(NewQuote { title: "Acme".to_owned(), rate_ids: vec![7, 9] }));
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_with_invalid_form_stays_idle_and_sends_nothing() {
    let mut state = composer_with_rates(&[7]);
    state.set_title(" ".to_owned());
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.phase, ComposerPhase::Idle);
    assert_eq!(state.errors.title, Some(REQUIRED));
    assert_eq!(state.errors.rate_ids, Some(CHOOSE_RATE));
}

#[test]
fn begin_submit_with_valid_form_moves_to_submitting() {
    let mut state = composer_with_rates(&[7, 8]);
    state.set_title("Acme".to_owned());
    state.toggle_rate(7);
    let body = state.begin_submit().unwrap();
    assert_eq!(body, NewQuote { title: "Acme".to_owned(), rate_ids: vec![7] });
    assert_eq!(state.phase, ComposerPhase::Submitting);
    assert!(state.errors.is_empty());
}

#[test]
fn no_second_submit_while_in_flight() {
    let mut state = composer_with_rates(&[7]);
    state.set_title("Acme".to_owned());
    state.toggle_rate(7);
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
}

#[test]
fn success_records_quote_id_and_blocks_resubmit() {
    let mut state = composer_with_rates(&[7]);
    state.set_title("Acme".to_owned());
    state.toggle_rate(7);
    state.begin_submit();
    state.finish_submit(Ok(42));
    assert_eq!(state.phase, ComposerPhase::Success { quote_id: 42 });
    assert!(state.is_done());
    assert_eq!(state.begin_submit(), None);
}

#[test]
fn failure_keeps_form_values_and_allows_resubmit() {
    let mut state = composer_with_rates(&[7]);
    state.set_title("Acme".to_owned());
    state.toggle_rate(7);
    state.begin_submit();
    state.finish_submit(Err(ApiError::Status { status: 400, message: "title and rate_ids required".to_owned() }));

    assert_eq!(state.failure(), Some("title and rate_ids required"));
    assert_eq!(state.form.title, "Acme");
    assert!(state.is_selected(7));
    assert!(state.begin_submit().is_some());
}

#[test]
fn malformed_create_response_surfaces_unexpected_response() {
    let mut state = composer_with_rates(&[7]);
    state.set_title("Acme".to_owned());
    state.toggle_rate(7);
    state.begin_submit();
    state.finish_submit(Err(ApiError::Malformed("no id".to_owned())));
    assert_eq!(state.failure(), Some("Unexpected server response."));
}

// =============================================================
// Rate selection
// =============================================================

#[test]
fn toggle_rate_ignores_ids_not_displayed() {
    let mut state = composer_with_rates(&[7]);
    state.toggle_rate(99);
    assert!(!state.is_selected(99));
    state.toggle_rate(7);
    assert!(state.is_selected(7));
    state.toggle_rate(7);
    assert!(!state.is_selected(7));
}

#[test]
fn changing_selector_prunes_orphaned_rate_ids() {
    let mut state = composer_with_rates(&[7, 8]);
    state.toggle_rate(7);
    state.toggle_rate(8);

    let query = state.select_port_pair(Some(3)).unwrap();
    assert!(state.form.rate_ids.is_empty());
    state.apply_rates(&query, Ok(vec![rate(8), rate(12)]));
    assert!(state.form.rate_ids.is_empty());
    assert_eq!(state.rates.rates.len(), 2);
}

#[test]
fn clearing_selector_issues_no_query() {
    let mut state = composer_with_rates(&[7]);
    assert_eq!(state.select_container_type(None), None);
    assert!(state.rates.rates.is_empty());
}

#[test]
fn stale_rates_do_not_reach_the_composer() {
    let mut state = ComposerState::default();
    state.select_port_pair(Some(1));
    let first = state.select_container_type(Some(2)).unwrap();
    let second = state.select_port_pair(Some(5)).unwrap();

    assert!(state.apply_rates(&second, Ok(vec![rate(50)])));
    assert!(!state.apply_rates(&first, Ok(vec![rate(7)])));
    assert_eq!(state.rates.rates.iter().map(|r| r.id).collect::<Vec<_>>(), vec![50]);
}
